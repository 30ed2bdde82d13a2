use std::fmt;
use std::ops::{Add, Mul};

/// Unique identifier for any entity the creature interacts with.
///
/// Dragons, riders and owners all share one id space; the core never owns the
/// entity behind an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Continuous world-space vector (positions, motion, look directions).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotates the vector around the vertical axis by `angle` radians.
    ///
    /// Matches the world's yaw convention: positive angles turn from +z
    /// towards +x, and the vertical component is untouched.
    pub fn rotate_yaw(self, angle: f32) -> Self {
        let (sin, cos) = (angle as f64).sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: self.z * cos - self.x * sin,
        }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Body orientation in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facing {
    pub yaw: f32,
    pub pitch: f32,
}

impl Facing {
    pub const fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }
}

/// Collision box extents.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Ordered life stages derived from age.
///
/// The derived ordering (`Hatchling < Juvenile < Adult`) is relied upon by
/// growth monotonicity checks.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LifeStage {
    Hatchling,
    Juvenile,
    Adult,
}

impl LifeStage {
    pub const fn is_hatchling(self) -> bool {
        matches!(self, Self::Hatchling)
    }

    pub const fn is_adult(self) -> bool {
        matches!(self, Self::Adult)
    }
}

/// Visual/breed tag inherited by offspring.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Breed {
    Aether,
    End,
    Fire,
    Forest,
    Ghost,
    Ice,
    Nether,
    Water,
}

/// Snapshot of the entity that triggers an interaction or mounts the creature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Actor {
    pub id: EntityId,
    pub facing: Facing,
    pub sneaking: bool,
}

impl Actor {
    pub const fn new(id: EntityId) -> Self {
        Self {
            id,
            facing: Facing::new(0.0, 0.0),
            sneaking: false,
        }
    }

    #[must_use]
    pub const fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    #[must_use]
    pub const fn sneaking(mut self) -> Self {
        self.sneaking = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6 && (a.z - b.z).abs() < 1e-6
    }

    #[test]
    fn rotate_yaw_half_turn_reverses_horizontal_direction() {
        let look = Vec3::new(0.0, 0.5, 1.0);
        assert!(close(look.rotate_yaw(PI), Vec3::new(0.0, 0.5, -1.0)));
    }

    #[test]
    fn rotate_yaw_quarter_turn_maps_z_onto_x() {
        let look = Vec3::new(0.0, 0.0, 1.0);
        assert!(close(look.rotate_yaw(PI * 0.5), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(look.rotate_yaw(PI * -0.5), Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn life_stages_are_ordered_by_age() {
        assert!(LifeStage::Hatchling < LifeStage::Juvenile);
        assert!(LifeStage::Juvenile < LifeStage::Adult);
    }

    #[test]
    fn breed_parses_from_snake_case() {
        assert_eq!("nether".parse::<Breed>().unwrap(), Breed::Nether);
        assert_eq!(Breed::Forest.to_string(), "forest");
    }
}
