//! The creature record and its controllers.
//!
//! A [`Dragon`] owns exactly one instance of each controller. Per-tick
//! updates go through [`crate::engine::DragonEngine`]; interactions, damage,
//! mounting and breeding are methods on the record itself. Every externally
//! visible effect is appended to an ordered event outbox.
mod breeding;
mod events;
mod growth;
mod immunity;
mod interaction;
mod locomotion;
mod names;
mod ownership;
mod riding;
mod vitals;

pub use breeding::{
    BreedError, BreedingProtocol, MateRejection, OffspringDescriptor, breed, mate_check,
    mate_eligible,
};
pub use events::{DragonEvent, VisualEffect};
pub use growth::{GrowthController, StageChange};
pub use immunity::DamageImmunityPolicy;
pub use interaction::{
    InteractionBranch, InteractionOutcome, InteractionReport, Side, select_interaction,
};
pub use locomotion::LocomotionModeController;
pub use names::synthesize_name;
pub use ownership::{OwnershipProtocol, TameOutcome};
pub use riding::{MountError, RidingController, Steering};
pub use vitals::{AmbientSound, AttackTarget};

use crate::config::DragonConfig;
use crate::env::{BreedOracle, NavigationFactory, PathNavigation};
use crate::state::{
    Actor, Attributes, Breed, DamageTags, Dimensions, EntityId, Facing, LifeStage,
    PersistedSnapshot, ReplicatedState, Vec3,
};

/// Physical body state shared with the host's physics.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Body {
    pub position: Vec3,
    pub motion: Vec3,
    pub facing: Facing,
    pub prev_facing: Facing,
    pub head_yaw: f32,
    pub prev_head_yaw: f32,
    pub on_ground: bool,
    pub dimensions: Dimensions,
}

/// One tameable, rideable, breedable creature.
#[derive(Debug)]
pub struct Dragon {
    id: EntityId,
    breed: Breed,
    custom_name: Option<String>,
    body: Body,
    health: f32,
    attributes: Attributes,
    config: DragonConfig,

    growth: GrowthController,
    immunity: DamageImmunityPolicy,
    ownership: OwnershipProtocol,
    locomotion: LocomotionModeController,
    riding: RidingController,
    breeding: BreedingProtocol,

    saddled: bool,
    sitting: bool,
    attack_target: Option<EntityId>,
    /// Reserved for the breath attack; never set.
    breathing: bool,
    death_timer: Option<u32>,
    removed: bool,

    events: Vec<DragonEvent>,
}

impl Dragon {
    /// Spawns a fully grown, wild creature.
    pub fn spawn(
        id: EntityId,
        breed: Breed,
        position: Vec3,
        config: &DragonConfig,
        breeds: &dyn BreedOracle,
        navigation: &dyn NavigationFactory,
    ) -> Self {
        Self::create(
            id,
            breed,
            position,
            GrowthController::adult(config.life_stages),
            config,
            breeds,
            navigation,
        )
    }

    /// Creates a newborn from a breeding result.
    pub fn hatch(
        id: EntityId,
        offspring: &OffspringDescriptor,
        config: &DragonConfig,
        breeds: &dyn BreedOracle,
        navigation: &dyn NavigationFactory,
    ) -> Self {
        let mut dragon = Self::create(
            id,
            offspring.breed,
            offspring.position,
            GrowthController::new(config.life_stages, offspring.ticks_alive),
            config,
            breeds,
            navigation,
        );
        dragon.body.motion = offspring.motion;
        dragon.custom_name = offspring.name.clone();
        dragon
    }

    fn create(
        id: EntityId,
        breed: Breed,
        position: Vec3,
        growth: GrowthController,
        config: &DragonConfig,
        breeds: &dyn BreedOracle,
        navigation: &dyn NavigationFactory,
    ) -> Self {
        let attributes = config.attributes;
        let base = Dimensions::new(config.vitals.base_width, config.vitals.base_height);
        Self {
            id,
            breed,
            custom_name: None,
            body: Body {
                position,
                on_ground: true,
                dimensions: base.scaled(growth.scale()),
                ..Body::default()
            },
            health: attributes.max_health,
            attributes,
            config: *config,
            growth,
            immunity: DamageImmunityPolicy::new(breeds.immunities(breed)),
            ownership: OwnershipProtocol::wild(),
            locomotion: LocomotionModeController::grounded(config.locomotion, navigation),
            riding: RidingController::default(),
            breeding: BreedingProtocol::new(config.breeding.reproduction_limit),
            saddled: false,
            sitting: false,
            attack_target: None,
            breathing: false,
            death_timer: None,
            removed: false,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn breed(&self) -> Breed {
        self.breed
    }

    pub fn custom_name(&self) -> Option<&str> {
        self.custom_name.as_deref()
    }

    pub fn set_custom_name(&mut self, name: Option<String>) {
        self.custom_name = name;
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Host physics writes position, motion and ground contact here.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn health_fraction(&self) -> f32 {
        self.health / self.attributes.max_health
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn config(&self) -> &DragonConfig {
        &self.config
    }

    pub fn growth(&self) -> &GrowthController {
        &self.growth
    }

    pub fn ticks_alive(&self) -> u32 {
        self.growth.ticks_alive()
    }

    pub fn life_stage(&self) -> LifeStage {
        self.growth.stage()
    }

    pub fn scale(&self) -> f32 {
        self.growth.scale()
    }

    pub fn immunities(&self) -> DamageTags {
        self.immunity.immunities()
    }

    pub fn immunity_mut(&mut self) -> &mut DamageImmunityPolicy {
        &mut self.immunity
    }

    pub fn ownership(&self) -> &OwnershipProtocol {
        &self.ownership
    }

    pub fn is_tamed(&self) -> bool {
        self.ownership.is_tamed()
    }

    pub fn owner(&self) -> Option<EntityId> {
        self.ownership.owner()
    }

    pub fn is_owned_by(&self, actor: EntityId) -> bool {
        self.ownership.is_owned_by(actor)
    }

    pub fn locomotion(&self) -> &LocomotionModeController {
        &self.locomotion
    }

    pub fn is_flying(&self) -> bool {
        self.locomotion.is_flying()
    }

    pub fn navigation(&self) -> &dyn PathNavigation {
        self.locomotion.navigation()
    }

    pub fn navigation_mut(&mut self) -> &mut dyn PathNavigation {
        self.locomotion.navigation_mut()
    }

    pub fn controlling_passenger(&self) -> Option<EntityId> {
        self.riding.controlling_passenger()
    }

    pub fn breeding(&self) -> &BreedingProtocol {
        &self.breeding
    }

    pub fn reproduction_count(&self) -> u8 {
        self.breeding.reproduction_count()
    }

    pub fn is_in_love(&self) -> bool {
        self.breeding.is_in_love()
    }

    /// Courtship flag; set and reset by the host.
    pub fn set_in_love(&mut self, in_love: bool) {
        self.breeding.set_in_love(in_love);
    }

    pub fn is_saddled(&self) -> bool {
        self.saddled
    }

    pub fn is_sitting(&self) -> bool {
        self.sitting
    }

    pub fn set_sitting(&mut self, sitting: bool) {
        if self.sitting != sitting {
            self.sitting = sitting;
            self.events.push(DragonEvent::SitChanged { sitting });
        }
    }

    pub fn attack_target(&self) -> Option<EntityId> {
        self.attack_target
    }

    pub fn set_attack_target(&mut self, target: Option<EntityId>) {
        self.attack_target = target;
    }

    pub fn is_breathing(&self) -> bool {
        self.breathing
    }

    pub fn death_timer(&self) -> Option<u32> {
        self.death_timer
    }

    pub fn is_dying(&self) -> bool {
        self.death_timer.is_some()
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Takes every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<DragonEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[DragonEvent] {
        &self.events
    }

    pub fn replicated(&self) -> ReplicatedState {
        ReplicatedState {
            flying: self.is_flying(),
            saddled: self.saddled,
            breathing: self.breathing,
            ticks_alive: self.ticks_alive(),
        }
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            saddle: self.saddled,
            ticks_alive: Some(self.ticks_alive()),
            repro_count: self.reproduction_count(),
        }
    }

    /// Applies a loaded snapshot. A missing age keeps the current one; an
    /// out-of-range reproduction count is clamped to the limit.
    pub fn restore(&mut self, snapshot: &PersistedSnapshot, navigation: &dyn NavigationFactory) {
        self.saddled = snapshot.saddle;
        self.breeding.restore_count(snapshot.repro_count);
        if let Some(ticks_alive) = snapshot.ticks_alive {
            self.set_ticks_alive(ticks_alive, navigation);
        }
        self.dismount_if_ineligible();
    }

    /// Reinstates a saved owner. Has no effect on an already tamed creature.
    pub fn restore_owner(&mut self, owner: EntityId) {
        if !self.is_tamed() {
            self.ownership = OwnershipProtocol::owned_by(owner);
        }
    }

    /// Overrides the age and re-derives stage, scale and size immediately.
    ///
    /// A creature that becomes a hatchling while flying is put on the ground.
    pub fn set_ticks_alive(&mut self, ticks_alive: u32, navigation: &dyn NavigationFactory) {
        let change = self.growth.set_ticks_alive(ticks_alive);
        self.on_growth(change);
        if self.life_stage().is_hatchling() && self.is_flying() {
            self.locomotion.apply_if_changed(
                false,
                LifeStage::Hatchling,
                &mut self.attributes,
                navigation,
                &mut self.events,
            );
        }
        self.dismount_if_ineligible();
    }

    /// A rider stays seated only while every mount precondition holds.
    fn dismount_if_ineligible(&mut self) {
        if let Some(rider) = self.riding.controlling_passenger()
            && self.mount_check(rider).is_err()
        {
            self.unmount();
        }
    }

    pub(crate) fn advance_growth(&mut self) -> Option<StageChange> {
        let change = self.growth.tick();
        self.on_growth(change);
        change
    }

    fn on_growth(&mut self, change: Option<StageChange>) {
        if let Some(StageChange { from, to }) = change {
            self.events.push(DragonEvent::StageChanged { from, to });
            self.recalculate_size();
        }
    }

    /// Rebuilds the collision box from the current scale, keeping the
    /// position and ground contact exactly as they were.
    fn recalculate_size(&mut self) {
        let position = self.body.position;
        let on_ground = self.body.on_ground;
        self.body.dimensions = self.dimensions();
        self.body.position = position;
        self.body.on_ground = on_ground;
        self.events.push(DragonEvent::SizeRecalculated {
            dimensions: self.body.dimensions,
        });
    }

    pub(crate) fn update_locomotion(
        &mut self,
        altitude: f32,
        in_liquid: bool,
        navigation: &dyn NavigationFactory,
    ) -> bool {
        let stage = self.life_stage();
        let desired = self.locomotion.evaluate(altitude, in_liquid, stage);
        self.locomotion.apply_if_changed(
            desired,
            stage,
            &mut self.attributes,
            navigation,
            &mut self.events,
        )
    }

    fn clear_path_and_target(&mut self) {
        self.locomotion.navigation_mut().clear_path();
        self.attack_target = None;
    }

    /// Resolves one tame attempt; `success` is rolled by the caller.
    pub fn attempt_tame(&mut self, actor: EntityId, success: bool) -> TameOutcome {
        let outcome = self.ownership.attempt_tame(actor, success);
        match outcome {
            TameOutcome::Tamed => {
                self.clear_path_and_target();
                self.events.push(DragonEvent::Tamed { owner: actor });
                self.events
                    .push(DragonEvent::VisualEffect(VisualEffect::TameSuccess));
            }
            TameOutcome::Failed => {
                self.events
                    .push(DragonEvent::VisualEffect(VisualEffect::TameFailure));
            }
            TameOutcome::AlreadyOwned => {}
        }
        outcome
    }

    /// Checks every mount precondition.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition.
    pub fn mount_check(&self, actor: EntityId) -> Result<(), MountError> {
        if self.is_dying() {
            return Err(MountError::Dying);
        }
        if !self.is_tamed() {
            return Err(MountError::NotTamed);
        }
        if !self.is_owned_by(actor) {
            return Err(MountError::NotOwner { actor });
        }
        if !self.saddled {
            return Err(MountError::NotSaddled);
        }
        if !self.life_stage().is_adult() {
            return Err(MountError::NotAdult {
                stage: self.life_stage(),
            });
        }
        if let Some(rider) = self.riding.controlling_passenger() {
            if rider != actor {
                return Err(MountError::Occupied { rider });
            }
        }
        Ok(())
    }

    pub fn can_mount(&self, actor: EntityId) -> bool {
        self.mount_check(actor).is_ok()
    }

    /// Seats `actor`: adopts their facing, clears path and target and stands
    /// up.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if any mount precondition fails.
    pub fn mount(&mut self, actor: &Actor) -> Result<(), MountError> {
        self.mount_check(actor.id)?;
        self.body.facing = actor.facing;
        self.body.head_yaw = actor.facing.yaw;
        self.riding.seat(actor.id);
        self.clear_path_and_target();
        self.set_sitting(false);
        self.events.push(DragonEvent::Mounted { rider: actor.id });
        Ok(())
    }

    pub fn unmount(&mut self) -> Option<EntityId> {
        let rider = self.riding.unmount();
        if let Some(rider) = rider {
            self.events.push(DragonEvent::Dismounted { rider });
        }
        rider
    }

    /// Jumps with the lift-off impulse. No-op for creatures that cannot fly.
    pub fn lift_off(&mut self) -> bool {
        match self.locomotion.lift_off_impulse(self.life_stage()) {
            Some(impulse) => {
                self.body.motion.y = impulse;
                self.body.on_ground = false;
                self.events.push(DragonEvent::LiftOff { impulse });
                true
            }
            None => false,
        }
    }

    /// Regular jump; flight-capable creatures always jump with the lift-off
    /// impulse.
    pub fn jump(&mut self) {
        self.body.motion.y = self.locomotion.jump_impulse(self.life_stage());
        self.body.on_ground = false;
    }

    pub(crate) fn steer(&mut self, input: &crate::env::RiderInput) -> Option<Vec3> {
        let reach = self.config.riding.reach;
        let steering = self.riding.steer(input, self.body.position, reach);
        self.body.head_yaw = steering.head_yaw;
        self.body.facing.pitch = steering.pitch;

        if steering.jump_edge {
            self.lift_off();
        }

        if !self.is_flying() {
            return None;
        }
        let speed = self.config.riding.speed_factor;
        self.locomotion
            .navigation_mut()
            .set_destination(steering.waypoint);
        self.events.push(DragonEvent::WaypointSet {
            target: steering.waypoint,
            speed,
        });
        Some(steering.waypoint)
    }

    pub(crate) fn begin_tick(&mut self) {
        self.body.prev_facing = self.body.facing;
        self.body.prev_head_yaw = self.body.head_yaw;
    }

    fn equip_saddle(&mut self) {
        self.saddled = true;
        self.events.push(DragonEvent::Saddled);
    }

    fn heal(&mut self, amount: f32) {
        let before = self.health;
        self.health = (self.health + amount).min(self.attributes.max_health);
        self.events.push(DragonEvent::Healed {
            amount: self.health - before,
        });
        self.events
            .push(DragonEvent::VisualEffect(VisualEffect::Heal));
    }

    fn toggle_sit(&mut self) {
        self.set_sitting(!self.sitting);
        self.clear_path_and_target();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::env::{BasicNavigationFactory, DefaultBreedTable};

    pub const OWNER: EntityId = EntityId(100);
    pub const STRANGER: EntityId = EntityId(200);

    pub fn wild(id: u32) -> Dragon {
        Dragon::spawn(
            EntityId(id),
            Breed::Forest,
            Vec3::new(0.0, 64.0, 0.0),
            &DragonConfig::default(),
            &DefaultBreedTable,
            &BasicNavigationFactory,
        )
    }

    pub fn tamed(id: u32) -> Dragon {
        let mut dragon = wild(id);
        dragon.attempt_tame(OWNER, true);
        dragon.drain_events();
        dragon
    }

    pub fn saddled(id: u32) -> Dragon {
        let mut dragon = tamed(id);
        dragon.saddled = true;
        dragon
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::env::{BasicNavigationFactory, DefaultBreedTable, NavigationKind};

    #[test]
    fn spawn_defaults_to_wild_grounded_adult() {
        let dragon = wild(1);
        assert_eq!(dragon.life_stage(), LifeStage::Adult);
        assert_eq!(dragon.ticks_alive(), 48_000);
        assert_eq!(dragon.scale(), 1.0);
        assert!(!dragon.is_tamed() && !dragon.is_flying() && !dragon.is_saddled());
        assert!(!dragon.is_breathing());
        assert_eq!(dragon.replicated(), ReplicatedState::initial(48_000));
    }

    #[test]
    fn spawn_applies_breed_immunities() {
        let dragon = Dragon::spawn(
            EntityId(1),
            Breed::Nether,
            Vec3::ZERO,
            &DragonConfig::default(),
            &DefaultBreedTable,
            &BasicNavigationFactory,
        );
        assert!(dragon.immunities().contains(DamageTags::LAVA));
    }

    #[test]
    fn tame_clears_path_and_target() {
        let mut dragon = wild(1);
        dragon.navigation_mut().set_destination(Vec3::new(5.0, 0.0, 5.0));
        dragon.set_attack_target(Some(STRANGER));

        assert_eq!(dragon.attempt_tame(OWNER, true), TameOutcome::Tamed);
        assert!(!dragon.navigation().has_path());
        assert_eq!(dragon.attack_target(), None);
        assert_eq!(
            dragon.drain_events(),
            vec![
                DragonEvent::Tamed { owner: OWNER },
                DragonEvent::VisualEffect(VisualEffect::TameSuccess),
            ]
        );
    }

    #[test]
    fn failed_tame_only_emits_effect() {
        let mut dragon = wild(1);
        dragon.set_attack_target(Some(STRANGER));
        assert_eq!(dragon.attempt_tame(OWNER, false), TameOutcome::Failed);
        assert_eq!(dragon.attack_target(), Some(STRANGER));
        assert_eq!(
            dragon.drain_events(),
            vec![DragonEvent::VisualEffect(VisualEffect::TameFailure)]
        );
    }

    #[test]
    fn mount_requires_owner_saddle_and_adult() {
        let dragon = tamed(1);
        assert_eq!(dragon.mount_check(OWNER), Err(MountError::NotSaddled));

        let mut dragon = saddled(1);
        assert_eq!(
            dragon.mount_check(STRANGER),
            Err(MountError::NotOwner { actor: STRANGER })
        );
        dragon.set_ticks_alive(30_000, &BasicNavigationFactory);
        assert_eq!(
            dragon.mount_check(OWNER),
            Err(MountError::NotAdult {
                stage: LifeStage::Juvenile
            })
        );
        assert_eq!(wild(2).mount_check(OWNER), Err(MountError::NotTamed));
    }

    #[test]
    fn mount_adopts_rider_facing_and_stands_up() {
        let mut dragon = saddled(1);
        dragon.set_sitting(true);
        dragon.set_attack_target(Some(STRANGER));
        let rider = Actor::new(OWNER).with_facing(Facing::new(90.0, 10.0));

        dragon.mount(&rider).unwrap();

        assert_eq!(dragon.controlling_passenger(), Some(OWNER));
        assert_eq!(dragon.body().facing, Facing::new(90.0, 10.0));
        assert!(!dragon.is_sitting());
        assert_eq!(dragon.attack_target(), None);
        assert_eq!(dragon.unmount(), Some(OWNER));
        assert_eq!(dragon.controlling_passenger(), None);
    }

    #[test]
    fn stage_change_resizes_in_place() {
        let mut dragon = wild(1);
        dragon.body_mut().position = Vec3::new(4.0, 70.0, -3.0);
        dragon.body_mut().on_ground = false;
        dragon.drain_events();

        dragon.set_ticks_alive(0, &BasicNavigationFactory);

        assert_eq!(dragon.body().position, Vec3::new(4.0, 70.0, -3.0));
        assert!(!dragon.body().on_ground);
        assert!(dragon.body().dimensions.width < 0.2);
        let events = dragon.drain_events();
        assert_eq!(
            events[0],
            DragonEvent::StageChanged {
                from: LifeStage::Adult,
                to: LifeStage::Hatchling
            }
        );
        assert!(matches!(events[1], DragonEvent::SizeRecalculated { .. }));
    }

    #[test]
    fn becoming_a_hatchling_grounds_a_flyer() {
        let mut dragon = wild(1);
        dragon.update_locomotion(10.0, false, &BasicNavigationFactory);
        assert!(dragon.is_flying());

        dragon.set_ticks_alive(5, &BasicNavigationFactory);

        assert!(!dragon.is_flying());
        assert_eq!(dragon.navigation().kind(), NavigationKind::Ground);
        assert_eq!(dragon.attributes().follow_range, 16.0);
    }

    #[test]
    fn restore_applies_snapshot_and_clamps_count() {
        let mut dragon = wild(1);
        dragon.restore(
            &PersistedSnapshot {
                saddle: true,
                ticks_alive: Some(100),
                repro_count: 9,
            },
            &BasicNavigationFactory,
        );
        assert!(dragon.is_saddled());
        assert_eq!(dragon.life_stage(), LifeStage::Hatchling);
        assert_eq!(dragon.reproduction_count(), 2);
    }

    #[test]
    fn restore_without_age_keeps_adult() {
        let mut dragon = wild(1);
        dragon.restore(&PersistedSnapshot::default(), &BasicNavigationFactory);
        assert_eq!(dragon.life_stage(), LifeStage::Adult);
        assert!(!dragon.is_saddled());
        assert_eq!(dragon.reproduction_count(), 0);
    }

    #[test]
    fn lift_off_needs_flight_capability() {
        let mut dragon = wild(1);
        assert!(dragon.lift_off());
        assert_eq!(dragon.body().motion.y, 1.0);

        dragon.set_ticks_alive(0, &BasicNavigationFactory);
        dragon.body_mut().motion = Vec3::ZERO;
        assert!(!dragon.lift_off());
        dragon.jump();
        assert_eq!(dragon.body().motion.y, 0.42);
    }

    #[test]
    fn younger_age_unseats_rider() {
        let mut dragon = saddled(1);
        dragon.mount(&Actor::new(OWNER)).unwrap();
        dragon.drain_events();

        dragon.set_ticks_alive(30_000, &BasicNavigationFactory);
        assert_eq!(dragon.life_stage(), LifeStage::Juvenile);
        assert_eq!(dragon.controlling_passenger(), None);
        assert!(
            dragon
                .drain_events()
                .contains(&DragonEvent::Dismounted { rider: OWNER })
        );
    }

    #[test]
    fn restored_saddle_loss_unseats_rider() {
        let mut dragon = saddled(1);
        dragon.mount(&Actor::new(OWNER)).unwrap();

        dragon.restore(&PersistedSnapshot::default(), &BasicNavigationFactory);
        assert!(!dragon.is_saddled());
        assert_eq!(dragon.controlling_passenger(), None);
    }

    #[test]
    fn restore_keeps_eligible_rider() {
        let mut dragon = saddled(1);
        dragon.mount(&Actor::new(OWNER)).unwrap();

        dragon.restore(
            &PersistedSnapshot {
                saddle: true,
                ticks_alive: None,
                repro_count: 1,
            },
            &BasicNavigationFactory,
        );
        assert_eq!(dragon.controlling_passenger(), Some(OWNER));
    }
}
