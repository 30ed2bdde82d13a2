//! Authoritative host for a population of dragons.
//!
//! [`Simulation`] owns every [`Dragon`], allocates ids, derives per-event
//! random seeds from the game seed and a nonce, runs the core tick pipeline
//! in id order, applies a minimal flat-world motion model, and publishes
//! replication messages for presentation mirrors.

use std::collections::BTreeMap;

use dragon_core::{
    Actor, AmbientSound, Breed, BreedError, DamageSource, Dragon, DragonConfig, DragonEngine,
    DragonEvent, EntityId, HeldItem, InteractionReport, MateRejection, OffspringDescriptor,
    ReplicatedState, ReplicationDelta, RiderInput, RollStream, Side, SyncQueue, TickReport,
    TitleCaseFormatter, Vec3, compute_seed,
};
use tracing::{debug, error, info, warn};

use crate::error::{Result, RuntimeError};
use crate::oracle::{FlatWorld, OracleManager};
use crate::repository::{SavedDragon, SnapshotRepository};

/// Seed contexts separating independent roll streams within one nonce.
const CONTEXT_INTERACT: u32 = 1;
const CONTEXT_BREED: u32 = 2;
const CONTEXT_AMBIENT: u32 = 3;

const GRAVITY: f64 = 0.08;
const DRAG: f64 = 0.98;

/// A core event tagged with its creature and the tick it happened on.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationEvent {
    pub tick: u64,
    pub dragon: EntityId,
    pub event: DragonEvent,
}

/// Messages from the simulating side to presentation mirrors, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum SyncMessage {
    /// A creature was registered with the replicated defaults.
    Spawned(EntityId),
    Delta(ReplicationDelta),
    Removed(EntityId),
}

pub struct Simulation {
    config: DragonConfig,
    oracles: OracleManager,
    game_seed: u64,
    nonce: u64,
    tick: u64,
    next_id: u32,
    dragons: BTreeMap<EntityId, Dragon>,
    sync: SyncQueue,
    outbox: Vec<SyncMessage>,
    formatter: TitleCaseFormatter,
    log: Vec<SimulationEvent>,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    /// Creates an empty simulation.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Config`] if `config` fails validation.
    pub fn new(config: DragonConfig, oracles: OracleManager, game_seed: u64) -> Result<Self> {
        config.validate()?;
        info!("Simulation created (seed {})", game_seed);
        Ok(Self {
            config,
            oracles,
            game_seed,
            nonce: 0,
            tick: 0,
            next_id: 1,
            dragons: BTreeMap::new(),
            sync: SyncQueue::new(ReplicatedState::initial(config.life_stages.adult_start)),
            outbox: Vec::new(),
            formatter: TitleCaseFormatter::new(),
            log: Vec::new(),
        })
    }

    pub fn config(&self) -> &DragonConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.dragons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dragons.is_empty()
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.dragons.keys().copied().collect()
    }

    pub fn get(&self, id: EntityId) -> Result<&Dragon> {
        self.dragons.get(&id).ok_or(RuntimeError::UnknownDragon(id))
    }

    fn get_mut(&mut self, id: EntityId) -> Result<&mut Dragon> {
        self.dragons
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownDragon(id))
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    fn next_seed(&mut self, entity: EntityId, context: u32) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce, entity.0, context);
        self.nonce += 1;
        seed
    }

    /// Spawns a wild adult.
    pub fn spawn(&mut self, breed: Breed, position: Vec3) -> EntityId {
        let id = self.allocate_id();
        let dragon = Dragon::spawn(
            id,
            breed,
            position,
            &self.config,
            self.oracles.breeds(),
            self.oracles.navigation(),
        );
        info!("Spawned {} dragon {} at {:?}", breed, id, position);
        self.register(dragon);
        id
    }

    /// Creates a newborn from a breeding result.
    pub fn hatch(&mut self, offspring: &OffspringDescriptor) -> EntityId {
        let id = self.allocate_id();
        let dragon = Dragon::hatch(
            id,
            offspring,
            &self.config,
            self.oracles.breeds(),
            self.oracles.navigation(),
        );
        info!(
            "Hatched {} dragon {} ({}) from {} and {}",
            offspring.breed,
            id,
            offspring.name.as_deref().unwrap_or("unnamed"),
            offspring.parents.0,
            offspring.parents.1
        );
        self.register(dragon);
        id
    }

    fn register(&mut self, mut dragon: Dragon) {
        let id = dragon.id();
        self.outbox.push(SyncMessage::Spawned(id));
        flush(
            &mut self.log,
            &mut self.sync,
            &mut self.outbox,
            self.tick,
            &mut dragon,
        );
        self.dragons.insert(id, dragon);
    }

    /// Advances every creature by one tick, in id order.
    ///
    /// Removed creatures are dropped from the simulation at the end of the
    /// tick.
    pub fn tick(&mut self) -> Result<Vec<(EntityId, TickReport)>> {
        self.tick += 1;
        let env = self.oracles.as_env();
        let world = self.oracles.world();

        let mut reports = Vec::with_capacity(self.dragons.len());
        let mut removed = Vec::new();

        for (&id, dragon) in self.dragons.iter_mut() {
            let report = DragonEngine::new(dragon).tick(&env)?;
            if !report.dying {
                integrate(dragon, world);
            }
            flush(
                &mut self.log,
                &mut self.sync,
                &mut self.outbox,
                self.tick,
                dragon,
            );
            if report.removed {
                removed.push(id);
            }
            reports.push((id, report));
        }

        for id in removed {
            self.dragons.remove(&id);
            self.sync.forget(id);
            self.outbox.push(SyncMessage::Removed(id));
            info!("Dragon {} removed", id);
        }

        Ok(reports)
    }

    /// Runs `count` ticks.
    pub fn run(&mut self, count: u64) -> Result<()> {
        for _ in 0..count {
            self.tick()?;
        }
        Ok(())
    }

    /// Routes an interaction to the simulating side of a creature.
    pub fn interact(
        &mut self,
        id: EntityId,
        actor: &Actor,
        held: &mut HeldItem,
    ) -> Result<InteractionReport> {
        let seed = self.next_seed(id, CONTEXT_INTERACT);
        let dragon = self
            .dragons
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownDragon(id))?;

        let env = self.oracles.as_env();
        let mut rng = RollStream::new(&self.oracles.rng, seed);
        let report = dragon.interact_in(Side::Authoritative, actor, held, &env, &mut rng)?;

        match report.branch {
            Some(branch) => debug!("Actor {} interaction with {}: {}", actor.id, id, branch),
            None => debug!("Actor {} interaction with {} not handled", actor.id, id),
        }

        flush(
            &mut self.log,
            &mut self.sync,
            &mut self.outbox,
            self.tick,
            dragon,
        );
        Ok(report)
    }

    /// Seats `actor` directly, bypassing the interaction protocol.
    pub fn mount(&mut self, id: EntityId, actor: &Actor) -> Result<()> {
        let tick = self.tick;
        let dragon = self
            .dragons
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownDragon(id))?;
        if let Err(err) = dragon.mount(actor) {
            warn!("Actor {} cannot mount {}: {}", actor.id, id, err);
            return Err(err.into());
        }
        flush(&mut self.log, &mut self.sync, &mut self.outbox, tick, dragon);
        Ok(())
    }

    pub fn dismount(&mut self, id: EntityId) -> Result<Option<EntityId>> {
        let tick = self.tick;
        let dragon = self
            .dragons
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownDragon(id))?;
        let rider = dragon.unmount();
        flush(&mut self.log, &mut self.sync, &mut self.outbox, tick, dragon);
        Ok(rider)
    }

    pub fn hurt(&mut self, id: EntityId, source: &DamageSource, amount: f32) -> Result<bool> {
        let tick = self.tick;
        let dragon = self
            .dragons
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownDragon(id))?;
        let accepted = dragon.hurt(source, amount);
        if !accepted {
            debug!("Dragon {} ignored {:?} damage", id, source.tags);
        }
        flush(&mut self.log, &mut self.sync, &mut self.outbox, tick, dragon);
        Ok(accepted)
    }

    /// Sets the external courtship flag.
    pub fn set_in_love(&mut self, id: EntityId, in_love: bool) -> Result<()> {
        self.get_mut(id)?.set_in_love(in_love);
        Ok(())
    }

    pub fn set_name(&mut self, id: EntityId, name: Option<String>) -> Result<()> {
        self.get_mut(id)?.set_custom_name(name);
        Ok(())
    }

    /// Latest control state of a rider, read on every following tick.
    pub fn set_rider_input(&self, rider: EntityId, input: RiderInput) {
        self.oracles.riders().set_input(rider, input);
    }

    /// Breeds two creatures and hatches the offspring.
    ///
    /// On success both courtship flags are reset.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::Breed`] for an ineligible pair; neither parent is
    /// changed in that case.
    pub fn breed(&mut self, a: EntityId, b: EntityId) -> Result<EntityId> {
        if a == b {
            self.get(a)?;
            let err = BreedError::Ineligible(MateRejection::SameIndividual(a));
            error!("Breeding {} with itself rejected: {}", a, err);
            return Err(err.into());
        }

        let mut first = self
            .dragons
            .remove(&a)
            .ok_or(RuntimeError::UnknownDragon(a))?;
        let Some(mut second) = self.dragons.remove(&b) else {
            self.dragons.insert(a, first);
            return Err(RuntimeError::UnknownDragon(b));
        };

        let seed = self.next_seed(a, CONTEXT_BREED);
        let mut rng = RollStream::new(&self.oracles.rng, seed);
        let result = dragon_core::breed(&mut first, &mut second, &mut rng, &self.formatter);
        if result.is_ok() {
            first.set_in_love(false);
            second.set_in_love(false);
        }
        self.dragons.insert(a, first);
        self.dragons.insert(b, second);

        match result {
            Ok(offspring) => Ok(self.hatch(&offspring)),
            Err(err) => {
                error!("Breeding {} with {} rejected: {}", a, b, err);
                Err(err.into())
            }
        }
    }

    /// Picks the next ambient sound of a creature.
    pub fn ambient_sound(&mut self, id: EntityId) -> Result<AmbientSound> {
        let seed = self.next_seed(id, CONTEXT_AMBIENT);
        let dragon = self.get(id)?;
        let mut rng = RollStream::new(&self.oracles.rng, seed);
        Ok(dragon.ambient_sound(&mut rng))
    }

    /// Takes all replication messages produced since the last drain.
    pub fn drain_sync(&mut self) -> Vec<SyncMessage> {
        std::mem::take(&mut self.outbox)
    }

    /// Takes all core events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.log)
    }

    pub fn save(&self, id: EntityId, repo: &dyn SnapshotRepository) -> Result<()> {
        let saved = SavedDragon::capture(self.get(id)?);
        repo.save(&saved)?;
        info!("Saved dragon {}", id);
        Ok(())
    }

    /// Loads a stored creature back into the simulation.
    ///
    /// Keeps the stored id when it is free and allocates a new one otherwise.
    /// Returns `None` if the repository has no record for `id`.
    pub fn load(&mut self, id: EntityId, repo: &dyn SnapshotRepository) -> Result<Option<EntityId>> {
        let Some(saved) = repo.load(id)? else {
            return Ok(None);
        };
        Ok(Some(self.restore(&saved)))
    }

    pub fn restore(&mut self, saved: &SavedDragon) -> EntityId {
        let id = if self.dragons.contains_key(&saved.id) {
            self.allocate_id()
        } else {
            self.next_id = self.next_id.max(saved.id.0 + 1);
            saved.id
        };

        let mut dragon = Dragon::spawn(
            id,
            saved.breed,
            saved.position,
            &self.config,
            self.oracles.breeds(),
            self.oracles.navigation(),
        );
        dragon.set_custom_name(saved.name.clone());
        if let Some(owner) = saved.owner {
            dragon.restore_owner(owner);
        }
        dragon.restore(&saved.snapshot, self.oracles.navigation());

        info!(
            "Restored dragon {} as {} ({} ticks alive)",
            saved.id,
            id,
            dragon.ticks_alive()
        );
        self.register(dragon);
        id
    }
}

/// Builder for [`Simulation`].
#[derive(Default)]
pub struct SimulationBuilder {
    config: Option<DragonConfig>,
    oracles: Option<OracleManager>,
    seed: u64,
}

impl SimulationBuilder {
    fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: DragonConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Falls back to the default config and oracles for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Config`] if the config is invalid.
    pub fn build(self) -> Result<Simulation> {
        Simulation::new(
            self.config.unwrap_or_default(),
            self.oracles.unwrap_or_default(),
            self.seed,
        )
    }
}

/// Moves events from a creature's outbox into the log and publishes its
/// replicated state.
fn flush(
    log: &mut Vec<SimulationEvent>,
    sync: &mut SyncQueue,
    outbox: &mut Vec<SyncMessage>,
    tick: u64,
    dragon: &mut Dragon,
) {
    let id = dragon.id();
    for event in dragon.drain_events() {
        match &event {
            DragonEvent::StageChanged { from, to } => {
                info!("Dragon {} grew from {} to {}", id, from, to)
            }
            DragonEvent::Tamed { owner } => info!("Dragon {} tamed by {}", id, owner),
            DragonEvent::DeathStarted => info!("Dragon {} is dying", id),
            _ => debug!("Dragon {} event: {:?}", id, event),
        }
        log.push(SimulationEvent {
            tick,
            dragon: id,
            event,
        });
    }

    sync.publish(id, dragon.replicated());
    outbox.extend(sync.drain().into_iter().map(SyncMessage::Delta));
}

/// Minimal motion model for a flat world: flyers move straight to their
/// destination, everything else falls under gravity until it lands.
fn integrate(dragon: &mut Dragon, world: &FlatWorld) {
    let flying = dragon.is_flying();
    let ridden = dragon.controlling_passenger().is_some();
    let speed = dragon.attributes().flying_speed;
    let destination = dragon.navigation().destination();
    let mut arrived = false;

    let body = dragon.body_mut();
    match destination {
        Some(target) if flying => {
            let offset = Vec3::new(
                target.x - body.position.x,
                target.y - body.position.y,
                target.z - body.position.z,
            );
            let distance = offset.length();
            if distance > speed {
                body.position = body.position + offset * (speed / distance);
            } else {
                body.position = target;
                arrived = true;
            }
            body.motion = Vec3::ZERO;
        }
        _ => {
            body.position.y += body.motion.y;
            body.motion.y = (body.motion.y - GRAVITY) * DRAG;
        }
    }

    let ground = world.ground_y();
    if body.position.y <= ground {
        body.position.y = ground;
        body.motion.y = 0.0;
        body.on_ground = true;
    } else {
        body.on_ground = false;
    }

    if arrived && !ridden {
        dragon.navigation_mut().clear_path();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let mut config = DragonConfig::default();
        config.taming.success_odds = 0;
        assert!(matches!(
            Simulation::new(config, OracleManager::default(), 1),
            Err(RuntimeError::Config(_))
        ));
    }

    #[test]
    fn ids_are_allocated_in_order() {
        let mut sim = Simulation::new(DragonConfig::default(), OracleManager::default(), 1).unwrap();
        let a = sim.spawn(Breed::Fire, Vec3::new(0.0, 64.0, 0.0));
        let b = sim.spawn(Breed::Ice, Vec3::new(5.0, 64.0, 0.0));
        assert_eq!((a, b), (EntityId(1), EntityId(2)));
        assert_eq!(sim.ids(), vec![a, b]);
    }

    #[test]
    fn lift_off_rises_and_falls_back() {
        let mut sim = Simulation::new(DragonConfig::default(), OracleManager::default(), 1).unwrap();
        let id = sim.spawn(Breed::Forest, Vec3::new(0.0, 64.0, 0.0));
        assert!(sim.get_mut(id).unwrap().lift_off());

        sim.tick().unwrap();
        assert!(sim.get(id).unwrap().body().position.y > 64.0);

        sim.run(200).unwrap();
        let body = sim.get(id).unwrap().body();
        assert_eq!(body.position.y, 64.0);
        assert!(body.on_ground);
    }
}
