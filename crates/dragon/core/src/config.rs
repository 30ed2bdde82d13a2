//! Tunable parameters for the creature simulation.
//!
//! Every section is plain data (`Copy`) so controllers can own the part they
//! need. Hosts load a [`DragonConfig`] from TOML and call
//! [`DragonConfig::validate`] before spawning anything.

use crate::error::{DragonError, ErrorSeverity};
use crate::state::Attributes;

/// Root configuration, one table per controller.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragonConfig {
    pub life_stages: LifeStageConfig,
    pub attributes: Attributes,
    pub locomotion: LocomotionConfig,
    pub riding: RidingConfig,
    pub taming: TamingConfig,
    pub breeding: BreedingConfig,
    pub vitals: VitalsConfig,
}

impl DragonConfig {
    /// Maximum number of successful breedings credited to one individual.
    pub const REPRO_LIMIT: u8 = 2;
    /// Ticks between health reaching zero and removal.
    pub const MAX_DEATH_TIME: u32 = 120;

    pub fn new() -> Self {
        Self::default()
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stages = &self.life_stages;
        if stages.juvenile_start == 0 || stages.juvenile_start >= stages.adult_start {
            return Err(ConfigError::StageThresholds {
                juvenile_start: stages.juvenile_start,
                adult_start: stages.adult_start,
            });
        }
        for (field, value) in [
            ("hatchling_scale", stages.hatchling_scale),
            ("juvenile_scale", stages.juvenile_scale),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::ScaleOutOfRange { field, value });
            }
        }
        if stages.hatchling_scale > stages.juvenile_scale {
            return Err(ConfigError::ScalesDecreasing {
                hatchling_scale: stages.hatchling_scale,
                juvenile_scale: stages.juvenile_scale,
            });
        }
        if self.taming.success_odds == 0 {
            return Err(ConfigError::ZeroOdds {
                field: "taming.success_odds",
            });
        }
        if self.vitals.growl_odds == 0 {
            return Err(ConfigError::ZeroOdds {
                field: "vitals.growl_odds",
            });
        }
        let limit = self.breeding.reproduction_limit;
        if !(1..=Self::REPRO_LIMIT).contains(&limit) {
            return Err(ConfigError::OutOfRange {
                field: "breeding.reproduction_limit",
                value: u32::from(limit),
                max: u32::from(Self::REPRO_LIMIT),
            });
        }
        let death_time = self.vitals.max_death_time;
        if !(1..=Self::MAX_DEATH_TIME).contains(&death_time) {
            return Err(ConfigError::OutOfRange {
                field: "vitals.max_death_time",
                value: death_time,
                max: Self::MAX_DEATH_TIME,
            });
        }
        if !(self.riding.reach > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "riding.reach",
            });
        }
        Ok(())
    }
}

/// Stage boundaries and the visual scale curve.
///
/// `[0, juvenile_start)` is Hatchling, `[juvenile_start, adult_start)` is
/// Juvenile, everything from `adult_start` on is Adult.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LifeStageConfig {
    pub juvenile_start: u32,
    pub adult_start: u32,
    /// Scale at tick 0.
    pub hatchling_scale: f32,
    /// Scale at `juvenile_start`.
    pub juvenile_scale: f32,
}

impl LifeStageConfig {
    pub const DEFAULT_JUVENILE_START: u32 = 24_000;
    pub const DEFAULT_ADULT_START: u32 = 48_000;
}

impl Default for LifeStageConfig {
    fn default() -> Self {
        Self {
            juvenile_start: Self::DEFAULT_JUVENILE_START,
            adult_start: Self::DEFAULT_ADULT_START,
            hatchling_scale: 0.04,
            juvenile_scale: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocomotionConfig {
    /// Minimum ground distance (exclusive) for flight.
    pub altitude_threshold: f32,
    pub follow_range_ground: f32,
    pub follow_range_flying: f32,
    /// Upward impulse applied by a lift-off.
    pub lift_off_impulse: f64,
    /// Upward impulse of an ordinary jump.
    pub jump_impulse: f64,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            altitude_threshold: 2.0,
            follow_range_ground: Attributes::BASE_FOLLOW_RANGE,
            follow_range_flying: Attributes::BASE_FOLLOW_RANGE * 2.0,
            lift_off_impulse: 1.0,
            jump_impulse: 0.42,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RidingConfig {
    /// Distance from the creature to the waypoint derived from rider input.
    pub reach: f64,
    pub speed_factor: f64,
    pub seat_height: f64,
    pub seat_height_sitting: f64,
}

impl Default for RidingConfig {
    fn default() -> Self {
        Self {
            reach: 10.0,
            speed_factor: 1.0,
            seat_height: 2.0,
            seat_height_sitting: 1.7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TamingConfig {
    /// A tame attempt succeeds with probability `1 / success_odds`.
    pub success_odds: u32,
}

impl Default for TamingConfig {
    fn default() -> Self {
        Self { success_odds: 5 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BreedingConfig {
    pub reproduction_limit: u8,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            reproduction_limit: DragonConfig::REPRO_LIMIT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VitalsConfig {
    pub max_death_time: u32,
    /// Adult collision box; scaled down for younger stages.
    pub base_width: f32,
    pub base_height: f32,
    pub eye_height: f32,
    /// Ambient sound is a growl with probability `1 / growl_odds`.
    pub growl_odds: u32,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            max_death_time: DragonConfig::MAX_DEATH_TIME,
            base_width: 2.75,
            base_height: 2.75,
            eye_height: 2.3375,
            growl_odds: 5,
        }
    }
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "life stage thresholds must satisfy 0 < juvenile_start < adult_start (got {juvenile_start}, {adult_start})"
    )]
    StageThresholds {
        juvenile_start: u32,
        adult_start: u32,
    },

    #[error("{field} must be in (0, 1] (got {value})")]
    ScaleOutOfRange { field: &'static str, value: f32 },

    #[error("hatchling_scale {hatchling_scale} exceeds juvenile_scale {juvenile_scale}")]
    ScalesDecreasing {
        hatchling_scale: f32,
        juvenile_scale: f32,
    },

    #[error("{field} must be at least 1")]
    ZeroOdds { field: &'static str },

    #[error("{field} must be positive")]
    NonPositive { field: &'static str },

    #[error("{field} must be in 1..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

impl DragonError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StageThresholds { .. } => "CONFIG_STAGE_THRESHOLDS",
            Self::ScaleOutOfRange { .. } => "CONFIG_SCALE_OUT_OF_RANGE",
            Self::ScalesDecreasing { .. } => "CONFIG_SCALES_DECREASING",
            Self::ZeroOdds { .. } => "CONFIG_ZERO_ODDS",
            Self::NonPositive { .. } => "CONFIG_NON_POSITIVE",
            Self::OutOfRange { .. } => "CONFIG_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(DragonConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let mut config = DragonConfig::default();
        config.life_stages.juvenile_start = 50_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StageThresholds { .. })
        ));
    }

    #[test]
    fn rejects_zero_scale() {
        let mut config = DragonConfig::default();
        config.life_stages.hatchling_scale = 0.0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_SCALE_OUT_OF_RANGE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_zero_tame_odds() {
        let mut config = DragonConfig::default();
        config.taming.success_odds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroOdds {
                field: "taming.success_odds"
            })
        );
    }

    #[test]
    fn bounds_reproduction_limit() {
        for limit in [0, DragonConfig::REPRO_LIMIT + 1] {
            let mut config = DragonConfig::default();
            config.breeding.reproduction_limit = limit;
            assert_eq!(
                config.validate(),
                Err(ConfigError::OutOfRange {
                    field: "breeding.reproduction_limit",
                    value: u32::from(limit),
                    max: 2,
                })
            );
        }
    }

    #[test]
    fn bounds_death_time() {
        let mut config = DragonConfig::default();
        config.vitals.max_death_time = 0;
        assert_eq!(
            config.validate().unwrap_err().error_code(),
            "CONFIG_OUT_OF_RANGE"
        );
        config.vitals.max_death_time = 500;
        assert!(config.validate().is_err());
        config.vitals.max_death_time = 60;
        assert_eq!(config.validate(), Ok(()));
    }
}
