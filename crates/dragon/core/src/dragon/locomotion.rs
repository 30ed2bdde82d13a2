//! Ground/flight mode switching.

use std::fmt;

use crate::config::LocomotionConfig;
use crate::env::{NavigationFactory, NavigationKind, PathNavigation};
use crate::state::{Attributes, LifeStage};

use super::DragonEvent;

pub struct LocomotionModeController {
    config: LocomotionConfig,
    flying: bool,
    navigation: Box<dyn PathNavigation>,
}

impl fmt::Debug for LocomotionModeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocomotionModeController")
            .field("config", &self.config)
            .field("flying", &self.flying)
            .field("navigation", &self.navigation.kind())
            .finish()
    }
}

impl LocomotionModeController {
    /// Grounded controller with a fresh ground navigation strategy.
    pub fn grounded(config: LocomotionConfig, factory: &dyn NavigationFactory) -> Self {
        Self {
            config,
            flying: false,
            navigation: factory.create(NavigationKind::Ground),
        }
    }

    pub fn is_flying(&self) -> bool {
        self.flying
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn navigation(&self) -> &dyn PathNavigation {
        self.navigation.as_ref()
    }

    pub fn navigation_mut(&mut self) -> &mut dyn PathNavigation {
        self.navigation.as_mut()
    }

    /// Whether the creature should be flying at this altitude.
    pub fn evaluate(&self, altitude: f32, in_liquid: bool, stage: LifeStage) -> bool {
        !stage.is_hatchling() && !in_liquid && altitude > self.config.altitude_threshold
    }

    /// Switches mode if `desired` differs from the current one.
    ///
    /// Writes the follow range before replacing the navigation strategy.
    /// Hatchlings are always forced to the ground. Returns true if the mode
    /// flipped.
    pub fn apply_if_changed(
        &mut self,
        desired: bool,
        stage: LifeStage,
        attributes: &mut Attributes,
        factory: &dyn NavigationFactory,
        events: &mut Vec<DragonEvent>,
    ) -> bool {
        let desired = desired && !stage.is_hatchling();
        if desired == self.flying {
            return false;
        }

        self.flying = desired;
        events.push(DragonEvent::FlightModeChanged { flying: desired });

        attributes.follow_range = if desired {
            self.config.follow_range_flying
        } else {
            self.config.follow_range_ground
        };
        events.push(DragonEvent::FollowRangeChanged {
            value: attributes.follow_range,
        });

        let kind = NavigationKind::for_flying(desired);
        self.navigation = factory.create(kind);
        events.push(DragonEvent::NavigationReplaced { kind });

        true
    }

    /// Upward impulse of a lift-off, or `None` for creatures that cannot fly.
    pub fn lift_off_impulse(&self, stage: LifeStage) -> Option<f64> {
        (!stage.is_hatchling()).then_some(self.config.lift_off_impulse)
    }

    /// Upward impulse of a regular jump for the given stage.
    pub fn jump_impulse(&self, stage: LifeStage) -> f64 {
        self.lift_off_impulse(stage)
            .unwrap_or(self.config.jump_impulse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::BasicNavigationFactory;

    fn controller() -> LocomotionModeController {
        LocomotionModeController::grounded(LocomotionConfig::default(), &BasicNavigationFactory)
    }

    #[test]
    fn hatchlings_never_want_to_fly() {
        let locomotion = controller();
        assert!(!locomotion.evaluate(100.0, false, LifeStage::Hatchling));
    }

    #[test]
    fn adults_fly_above_threshold_and_out_of_liquid() {
        let locomotion = controller();
        assert!(locomotion.evaluate(5.0, false, LifeStage::Adult));
        assert!(!locomotion.evaluate(2.0, false, LifeStage::Adult));
        assert!(!locomotion.evaluate(5.0, true, LifeStage::Juvenile));
    }

    #[test]
    fn repeated_apply_writes_once() {
        let mut locomotion = controller();
        let mut attributes = Attributes::default();
        let mut events = Vec::new();

        assert!(locomotion.apply_if_changed(
            true,
            LifeStage::Adult,
            &mut attributes,
            &BasicNavigationFactory,
            &mut events
        ));
        assert!(!locomotion.apply_if_changed(
            true,
            LifeStage::Adult,
            &mut attributes,
            &BasicNavigationFactory,
            &mut events
        ));

        assert_eq!(attributes.follow_range, 32.0);
        assert_eq!(locomotion.navigation().kind(), NavigationKind::Flight);
        assert_eq!(
            events,
            vec![
                DragonEvent::FlightModeChanged { flying: true },
                DragonEvent::FollowRangeChanged { value: 32.0 },
                DragonEvent::NavigationReplaced {
                    kind: NavigationKind::Flight
                },
            ]
        );
    }

    #[test]
    fn hatchling_request_is_clamped_to_ground() {
        let mut locomotion = controller();
        let mut attributes = Attributes::default();
        let mut events = Vec::new();
        assert!(!locomotion.apply_if_changed(
            true,
            LifeStage::Hatchling,
            &mut attributes,
            &BasicNavigationFactory,
            &mut events
        ));
        assert!(events.is_empty());
    }

    #[test]
    fn lift_off_is_stronger_than_a_jump() {
        let locomotion = controller();
        assert_eq!(locomotion.lift_off_impulse(LifeStage::Hatchling), None);
        let lift = locomotion.lift_off_impulse(LifeStage::Adult).unwrap();
        assert!(lift > locomotion.jump_impulse(LifeStage::Hatchling));
        assert_eq!(locomotion.jump_impulse(LifeStage::Juvenile), lift);
    }
}
