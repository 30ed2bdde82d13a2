//! End-to-end scenarios driven through the runtime host.

use std::sync::Arc;

use dragon_content::ContentFactory;
use dragon_core::{
    Actor, Breed, DamageSource, DamageTags, DragonConfig, DragonEvent, EntityId, Facing,
    HeldItem, InteractionBranch, InteractionOutcome, ItemId, LifeStage, MateRejection,
    BreedError, RiderInput, Vec3,
};
use runtime::{
    BreedOracleImpl, FlatWorld, ItemOracleImpl, OracleManager, PresentationMirror,
    RuntimeError, ScriptedRiders, Simulation, SyncMessage,
};

const PLAYER: EntityId = EntityId(900);
const SADDLE: ItemId = ItemId(10);
const COD: ItemId = ItemId(20);
const BEEF: ItemId = ItemId(3);

fn oracles() -> OracleManager {
    let content = ContentFactory::bundled();
    let items = content.load_items().expect("bundled items");
    let breeds = content.load_breeds().expect("bundled breeds");
    OracleManager::new(
        Arc::new(FlatWorld::new(64.0)),
        Arc::new(ScriptedRiders::new()),
        Arc::new(ItemOracleImpl::from_definitions(items)),
        Arc::new(BreedOracleImpl::from_definitions(breeds)),
    )
}

/// Taming always succeeds so scenarios do not depend on the roll.
fn simulation(seed: u64) -> Simulation {
    let mut config = DragonConfig::default();
    config.taming.success_odds = 1;
    Simulation::builder()
        .config(config)
        .oracles(oracles())
        .seed(seed)
        .build()
        .expect("valid config")
}

fn tame(sim: &mut Simulation, id: EntityId) {
    let mut held = HeldItem::of(COD, 1);
    let report = sim.interact(id, &Actor::new(PLAYER), &mut held).unwrap();
    assert_eq!(report.branch, Some(InteractionBranch::Tame));
    assert!(held.is_empty());
}

fn rider_input(jumping: bool) -> RiderInput {
    RiderInput {
        look: Vec3::new(0.0, 0.0, 1.0),
        facing: Facing::new(0.0, 0.0),
        forward: 1.0,
        strafe: 0.0,
        jumping,
    }
}

#[test]
fn tame_saddle_mount_and_fly() {
    let mut sim = simulation(7);
    let id = sim.spawn(Breed::Fire, Vec3::new(0.0, 64.0, 0.0));
    tame(&mut sim, id);
    assert_eq!(sim.get(id).unwrap().owner(), Some(PLAYER));

    let actor = Actor::new(PLAYER);
    let mut saddle = HeldItem::of(SADDLE, 1);
    let report = sim.interact(id, &actor, &mut saddle).unwrap();
    assert_eq!(report.branch, Some(InteractionBranch::EquipSaddle));
    assert!(sim.get(id).unwrap().is_saddled());

    let report = sim.interact(id, &actor, &mut HeldItem::empty()).unwrap();
    assert_eq!(report.branch, Some(InteractionBranch::Mount));
    assert_eq!(sim.get(id).unwrap().controlling_passenger(), Some(PLAYER));

    sim.set_rider_input(PLAYER, rider_input(true));
    sim.run(10).unwrap();

    let dragon = sim.get(id).unwrap();
    assert!(dragon.is_flying());
    assert!(dragon.navigation().has_path());
    assert!(dragon.body().position.z > 0.0);

    let mut mirror = PresentationMirror::new(sim.config().life_stages);
    mirror.apply(&sim.drain_sync());
    let replica = mirror.replica(id).unwrap();
    assert!(replica.is_flying());
    assert!(replica.is_saddled());
    assert_eq!(replica.life_stage(), LifeStage::Adult);
}

#[test]
fn stranger_cannot_mount() {
    let mut sim = simulation(1);
    let id = sim.spawn(Breed::Ice, Vec3::new(0.0, 64.0, 0.0));
    tame(&mut sim, id);

    let err = sim.mount(id, &Actor::new(EntityId(901))).unwrap_err();
    assert!(matches!(err, RuntimeError::Mount(_)));
    assert_eq!(sim.get(id).unwrap().controlling_passenger(), None);
}

#[test]
fn food_heals_wounded_dragon() {
    let mut sim = simulation(1);
    let id = sim.spawn(Breed::Forest, Vec3::new(0.0, 64.0, 0.0));
    let source = DamageSource::new(DamageTags::GENERIC);
    assert!(sim.hurt(id, &source, 20.0).unwrap());

    let mut held = HeldItem::of(BEEF, 2);
    let report = sim.interact(id, &Actor::new(PLAYER), &mut held).unwrap();
    assert_eq!(report.branch, Some(InteractionBranch::Heal { amount: 8.0 }));
    assert_eq!(report.outcome, InteractionOutcome::HandledSecondary);
    assert_eq!(held.count, 1);
    assert_eq!(sim.get(id).unwrap().health(), 928.0);
}

#[test]
fn breeding_hatches_offspring_until_limit() {
    let mut sim = simulation(3);
    let a = sim.spawn(Breed::Fire, Vec3::new(0.0, 64.0, 0.0));
    let b = sim.spawn(Breed::Water, Vec3::new(3.0, 64.0, 0.0));
    tame(&mut sim, a);
    tame(&mut sim, b);
    sim.set_name(a, Some("Ember".into())).unwrap();
    sim.set_name(b, Some("Tide".into())).unwrap();

    for round in 1..=2u8 {
        sim.set_in_love(a, true).unwrap();
        sim.set_in_love(b, true).unwrap();
        let child = sim.breed(a, b).unwrap();

        let offspring = sim.get(child).unwrap();
        assert_eq!(offspring.life_stage(), LifeStage::Hatchling);
        assert!(matches!(offspring.breed(), Breed::Fire | Breed::Water));
        assert!(offspring.custom_name().is_some());
        assert!(!offspring.is_tamed());
        assert_eq!(sim.get(a).unwrap().reproduction_count(), round);
        assert!(!sim.get(a).unwrap().is_in_love());
    }

    sim.set_in_love(a, true).unwrap();
    sim.set_in_love(b, true).unwrap();
    let err = sim.breed(a, b).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Breed(BreedError::Ineligible(MateRejection::ReproductionLimit(_)))
    ));
    assert_eq!(sim.len(), 4);
}

#[test]
fn breeding_requires_courtship() {
    let mut sim = simulation(3);
    let a = sim.spawn(Breed::Fire, Vec3::new(0.0, 64.0, 0.0));
    let b = sim.spawn(Breed::Fire, Vec3::new(3.0, 64.0, 0.0));
    tame(&mut sim, a);
    tame(&mut sim, b);

    let err = sim.breed(a, b).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Breed(BreedError::Ineligible(MateRejection::NotInLove(_)))
    ));
    assert_eq!(sim.get(a).unwrap().reproduction_count(), 0);

    let err = sim.breed(a, a).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Breed(BreedError::Ineligible(MateRejection::SameIndividual(_)))
    ));
}

#[test]
fn hatchling_replicates_its_age() {
    let mut sim = simulation(3);
    let a = sim.spawn(Breed::Ghost, Vec3::new(0.0, 64.0, 0.0));
    let b = sim.spawn(Breed::Ghost, Vec3::new(3.0, 64.0, 0.0));
    tame(&mut sim, a);
    tame(&mut sim, b);
    sim.set_in_love(a, true).unwrap();
    sim.set_in_love(b, true).unwrap();
    let child = sim.breed(a, b).unwrap();
    sim.run(5).unwrap();

    let mut mirror = PresentationMirror::new(sim.config().life_stages);
    mirror.apply(&sim.drain_sync());
    let replica = mirror.replica(child).unwrap();
    assert_eq!(replica.ticks_alive(), 5);
    assert_eq!(replica.life_stage(), LifeStage::Hatchling);
    assert!(replica.scale() < 0.3);
}

#[test]
fn dying_dragon_is_removed_after_death_time() {
    let mut sim = simulation(5);
    let id = sim.spawn(Breed::Forest, Vec3::new(0.0, 64.0, 0.0));
    let source = DamageSource::new(DamageTags::GENERIC);
    assert!(sim.hurt(id, &source, 10_000.0).unwrap());
    assert!(sim.get(id).unwrap().is_dying());

    let death_time = u64::from(sim.config().vitals.max_death_time);
    sim.run(death_time).unwrap();
    assert!(sim.get(id).is_ok());

    sim.tick().unwrap();
    assert!(matches!(sim.get(id), Err(RuntimeError::UnknownDragon(_))));

    let messages = sim.drain_sync();
    assert_eq!(messages.last(), Some(&SyncMessage::Removed(id)));
    let events = sim.drain_events();
    assert!(events.iter().any(|e| e.event == DragonEvent::DeathStarted));
    assert!(events.iter().any(|e| e.event == DragonEvent::Removed));
}

#[test]
fn same_seed_replays_identically() {
    fn script(seed: u64) -> Vec<DragonEvent> {
        let mut sim = Simulation::builder()
            .oracles(oracles())
            .seed(seed)
            .build()
            .unwrap();
        let id = sim.spawn(Breed::End, Vec3::new(0.0, 64.0, 0.0));
        let mut held = HeldItem::of(COD, 64);
        for _ in 0..16 {
            sim.interact(id, &Actor::new(PLAYER), &mut held).unwrap();
        }
        sim.drain_events().into_iter().map(|e| e.event).collect()
    }

    assert_eq!(script(42), script(42));
}

#[test]
fn unknown_dragon_is_reported() {
    let mut sim = simulation(1);
    let err = sim
        .interact(EntityId(77), &Actor::new(PLAYER), &mut HeldItem::empty())
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownDragon(EntityId(77))));
}
