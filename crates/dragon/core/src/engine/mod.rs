//! Fixed-tick update pipeline.
//!
//! [`DragonEngine`] is the only place the per-tick phases run. Within one tick
//! the order is growth, then locomotion evaluation, then rider input. A dying
//! creature runs only the death sequence.

use crate::dragon::{Dragon, StageChange};
use crate::env::{Env, OracleError};
use crate::state::Vec3;

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TickReport {
    pub stage_change: Option<StageChange>,
    /// Locomotion mode flipped this tick.
    pub mode_changed: bool,
    /// Waypoint submitted from rider input, if any.
    pub waypoint: Option<Vec3>,
    pub dying: bool,
    pub removed: bool,
}

pub struct DragonEngine<'a> {
    dragon: &'a mut Dragon,
}

impl<'a> DragonEngine<'a> {
    pub fn new(dragon: &'a mut Dragon) -> Self {
        Self { dragon }
    }

    /// Runs one tick.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] if `env` lacks the sensors or navigation
    /// factory, or lacks rider input while the creature is ridden. Nothing is
    /// mutated in that case.
    pub fn tick(&mut self, env: &Env<'_>) -> Result<TickReport, OracleError> {
        let dragon = &mut *self.dragon;

        if dragon.is_removed() {
            return Ok(TickReport {
                dying: dragon.is_dying(),
                removed: true,
                ..TickReport::default()
            });
        }

        if dragon.is_dying() {
            dragon.tick_death();
            return Ok(TickReport {
                dying: true,
                removed: dragon.is_removed(),
                ..TickReport::default()
            });
        }

        let sensors = env.sensors()?;
        let navigation = env.navigation()?;
        let riders = match dragon.controlling_passenger() {
            Some(_) => Some(env.riders()?),
            None => None,
        };

        dragon.begin_tick();

        let stage_change = dragon.advance_growth();

        let position = dragon.body().position;
        let altitude = sensors.ground_distance(position);
        let in_liquid = sensors.is_in_liquid(position);
        let mode_changed = dragon.update_locomotion(altitude, in_liquid, navigation);

        let waypoint = match (dragon.controlling_passenger(), riders) {
            (Some(rider), Some(riders)) => riders
                .rider_input(rider)
                .and_then(|input| dragon.steer(&input)),
            _ => None,
        };

        Ok(TickReport {
            stage_change,
            mode_changed,
            waypoint,
            dying: false,
            removed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DragonConfig;
    use crate::dragon::test_support::*;
    use crate::dragon::{DragonEvent, Side};
    use crate::env::{
        BasicNavigationFactory, DefaultBreedTable, HeldItem, ItemClass, ItemId, ItemOracle,
        NavigationKind, PcgRng, RiderInput, RiderInputOracle, RollStream, SensorOracle,
    };
    use crate::state::{Actor, Breed, DamageSource, DamageTags, EntityId, Facing, LifeStage};
    use std::sync::Mutex;

    struct Terrain {
        altitude: Mutex<f32>,
        liquid: bool,
    }

    impl Terrain {
        fn at(altitude: f32) -> Self {
            Self {
                altitude: Mutex::new(altitude),
                liquid: false,
            }
        }

        fn set(&self, altitude: f32) {
            *self.altitude.lock().unwrap() = altitude;
        }
    }

    impl SensorOracle for Terrain {
        fn ground_distance(&self, _position: Vec3) -> f32 {
            *self.altitude.lock().unwrap()
        }

        fn is_in_liquid(&self, _position: Vec3) -> bool {
            self.liquid
        }
    }

    struct Controls(Mutex<Option<RiderInput>>);

    impl RiderInputOracle for Controls {
        fn rider_input(&self, _rider: EntityId) -> Option<RiderInput> {
            *self.0.lock().unwrap()
        }
    }

    struct NoItems;

    impl ItemOracle for NoItems {
        fn classify(&self, _item: ItemId) -> ItemClass {
            ItemClass::Other
        }
    }

    fn env<'a>(terrain: &'a Terrain, controls: &'a Controls) -> Env<'a> {
        Env::with_all(terrain, controls, &BasicNavigationFactory, &NoItems)
    }

    #[test]
    fn missing_sensors_fail_without_mutation() {
        let mut dragon = Dragon::hatch(
            EntityId(1),
            &crate::dragon::OffspringDescriptor {
                parents: (EntityId(2), EntityId(3)),
                position: Vec3::ZERO,
                motion: Vec3::ZERO,
                ticks_alive: 0,
                breed: Breed::Ice,
                name: None,
            },
            &DragonConfig::default(),
            &DefaultBreedTable,
            &BasicNavigationFactory,
        );
        let result = DragonEngine::new(&mut dragon).tick(&Env::empty());
        assert_eq!(result, Err(OracleError::SensorsNotAvailable));
        assert_eq!(dragon.ticks_alive(), 0);
    }

    #[test]
    fn adult_takes_off_above_threshold() {
        let terrain = Terrain::at(5.0);
        let controls = Controls(Mutex::new(None));
        let mut dragon = wild(1);

        let report = DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();

        assert!(report.mode_changed);
        assert!(dragon.is_flying());
        assert_eq!(dragon.attributes().follow_range, 32.0);
        assert_eq!(dragon.navigation().kind(), NavigationKind::Flight);

        let again = DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();
        assert!(!again.mode_changed);

        terrain.set(0.5);
        DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();
        assert!(!dragon.is_flying());
        assert_eq!(dragon.attributes().follow_range, 16.0);
    }

    #[test]
    fn growth_runs_before_locomotion() {
        let terrain = Terrain::at(100.0);
        let controls = Controls(Mutex::new(None));
        let mut dragon = wild(1);
        dragon.set_ticks_alive(23_999, &BasicNavigationFactory);
        dragon.drain_events();

        let report = DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();

        // growth runs first, so the fresh juvenile may take off this tick
        assert_eq!(
            report.stage_change,
            Some(StageChange {
                from: LifeStage::Hatchling,
                to: LifeStage::Juvenile
            })
        );
        assert!(dragon.is_flying());
        let events = dragon.drain_events();
        assert!(matches!(events[0], DragonEvent::StageChanged { .. }));
        assert!(matches!(events[1], DragonEvent::SizeRecalculated { .. }));
        assert_eq!(events[2], DragonEvent::FlightModeChanged { flying: true });

        dragon.set_ticks_alive(0, &BasicNavigationFactory);
        DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();
        assert!(!dragon.is_flying());
    }

    #[test]
    fn rider_steers_while_flying() {
        let terrain = Terrain::at(10.0);
        let input = RiderInput {
            look: Vec3::new(0.0, 0.0, 1.0),
            facing: Facing::new(45.0, 30.0),
            forward: 1.0,
            strafe: 0.0,
            jumping: false,
        };
        let controls = Controls(Mutex::new(Some(input)));
        let mut dragon = saddled(1);
        dragon.mount(&Actor::new(OWNER)).unwrap();

        let report = DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();

        let expected = dragon.body().position + Vec3::new(0.0, 0.0, 10.0);
        assert_eq!(report.waypoint, Some(expected));
        assert_eq!(dragon.navigation().destination(), Some(expected));
        assert_eq!(dragon.body().head_yaw, 45.0);
        assert_eq!(dragon.body().facing.pitch, 15.0);
    }

    #[test]
    fn grounded_rider_jump_lifts_off_once() {
        let terrain = Terrain::at(0.0);
        let jumping = RiderInput {
            jumping: true,
            ..RiderInput::default()
        };
        let controls = Controls(Mutex::new(Some(jumping)));
        let mut dragon = saddled(1);
        dragon.mount(&Actor::new(OWNER)).unwrap();
        dragon.drain_events();

        let report = DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();
        assert_eq!(report.waypoint, None);
        assert_eq!(dragon.body().motion.y, 1.0);

        dragon.body_mut().motion = Vec3::ZERO;
        DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();
        assert_eq!(dragon.body().motion.y, 0.0);

        let lift_offs = dragon
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, DragonEvent::LiftOff { .. }))
            .count();
        assert_eq!(lift_offs, 1);
    }

    #[test]
    fn ridden_without_rider_oracle_is_an_error() {
        let terrain = Terrain::at(0.0);
        let mut dragon = saddled(1);
        dragon.mount(&Actor::new(OWNER)).unwrap();
        let env = Env::new(Some(&terrain), None, Some(&BasicNavigationFactory), None);
        assert_eq!(
            DragonEngine::new(&mut dragon).tick(&env),
            Err(OracleError::RidersNotAvailable)
        );
    }

    #[test]
    fn dying_creature_skips_growth_and_locomotion() {
        let terrain = Terrain::at(50.0);
        let controls = Controls(Mutex::new(None));
        let mut dragon = wild(1);
        dragon.set_ticks_alive(100, &BasicNavigationFactory);
        dragon.hurt(&DamageSource::new(DamageTags::GENERIC), 1_000.0);

        let mut ticks = 0;
        loop {
            let report = DragonEngine::new(&mut dragon).tick(&env(&terrain, &controls)).unwrap();
            ticks += 1;
            assert!(report.dying);
            assert_eq!(dragon.ticks_alive(), 100);
            assert!(!dragon.is_flying());
            if report.removed {
                break;
            }
        }
        assert_eq!(ticks, 121);
    }

    #[test]
    fn presentation_interaction_never_reaches_tick_state() {
        let mut dragon = wild(1);
        let before = dragon.replicated();
        let mut hand = HeldItem::empty();
        let mut rng = RollStream::new(&PcgRng, 0);
        dragon.interact(Side::Presentation, &Actor::new(OWNER), &mut hand, &NoItems, &mut rng);
        assert_eq!(dragon.replicated(), before);
    }
}
