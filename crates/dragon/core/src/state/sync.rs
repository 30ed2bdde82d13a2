//! Replicated state and the diff/apply layer between the simulating side and
//! the presentation side.
//!
//! The simulating side publishes the creature's [`ReplicatedState`] after each
//! tick; [`SyncQueue`] turns that into a [`ReplicationDelta`] carrying only the
//! fields that changed since the last publish. The presentation side applies
//! deltas to a [`DragonReplica`] and never writes anything back.

use std::collections::{BTreeMap, VecDeque};

use bitflags::bitflags;

use crate::config::LifeStageConfig;
use crate::state::{EntityId, LifeStage};

bitflags! {
    /// Tracks which fields of a [`ReplicatedState`] changed between publishes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ReplicatedFields: u8 {
        const FLYING      = 1 << 0;
        const SADDLED     = 1 << 1;
        const BREATHING   = 1 << 2;
        const TICKS_ALIVE = 1 << 3;
    }
}

/// Fields mirrored from the simulating side to the presentation side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplicatedState {
    pub flying: bool,
    pub saddled: bool,
    pub breathing: bool,
    pub ticks_alive: u32,
}

impl ReplicatedState {
    /// Registration defaults: grounded, unsaddled, adult.
    pub const fn initial(adult_start: u32) -> Self {
        Self {
            flying: false,
            saddled: false,
            breathing: false,
            ticks_alive: adult_start,
        }
    }
}

/// Changed fields of one creature plus their new values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplicationDelta {
    pub entity: EntityId,
    pub fields: ReplicatedFields,
    pub values: ReplicatedState,
}

impl ReplicationDelta {
    /// Compares two states. Returns `None` if nothing changed.
    pub fn from_states(
        entity: EntityId,
        before: &ReplicatedState,
        after: &ReplicatedState,
    ) -> Option<Self> {
        let mut fields = ReplicatedFields::empty();

        if before.flying != after.flying {
            fields |= ReplicatedFields::FLYING;
        }
        if before.saddled != after.saddled {
            fields |= ReplicatedFields::SADDLED;
        }
        if before.breathing != after.breathing {
            fields |= ReplicatedFields::BREATHING;
        }
        if before.ticks_alive != after.ticks_alive {
            fields |= ReplicatedFields::TICKS_ALIVE;
        }

        if fields.is_empty() {
            None
        } else {
            Some(Self {
                entity,
                fields,
                values: *after,
            })
        }
    }

    /// Copies exactly the flagged fields into `target`.
    pub fn apply_to(&self, target: &mut ReplicatedState) {
        if self.fields.contains(ReplicatedFields::FLYING) {
            target.flying = self.values.flying;
        }
        if self.fields.contains(ReplicatedFields::SADDLED) {
            target.saddled = self.values.saddled;
        }
        if self.fields.contains(ReplicatedFields::BREATHING) {
            target.breathing = self.values.breathing;
        }
        if self.fields.contains(ReplicatedFields::TICKS_ALIVE) {
            target.ticks_alive = self.values.ticks_alive;
        }
    }
}

/// Outbound queue on the simulating side.
///
/// Remembers the last published state per creature; a creature seen for the
/// first time is diffed against the registration defaults, which is also what
/// a fresh replica starts from.
#[derive(Clone, Debug)]
pub struct SyncQueue {
    baseline: ReplicatedState,
    published: BTreeMap<EntityId, ReplicatedState>,
    pending: VecDeque<ReplicationDelta>,
}

impl SyncQueue {
    pub fn new(baseline: ReplicatedState) -> Self {
        Self {
            baseline,
            published: BTreeMap::new(),
            pending: VecDeque::new(),
        }
    }

    /// Enqueues a delta if `current` differs from the last published state.
    ///
    /// Returns true if a delta was enqueued.
    pub fn publish(&mut self, entity: EntityId, current: ReplicatedState) -> bool {
        let before = self.published.get(&entity).unwrap_or(&self.baseline);
        match ReplicationDelta::from_states(entity, before, &current) {
            Some(delta) => {
                self.pending.push_back(delta);
                self.published.insert(entity, current);
                true
            }
            None => {
                self.published.entry(entity).or_insert(current);
                false
            }
        }
    }

    /// Stops tracking a removed creature.
    pub fn forget(&mut self, entity: EntityId) {
        self.published.remove(&entity);
        self.pending.retain(|delta| delta.entity != entity);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns all queued deltas in publish order.
    pub fn drain(&mut self) -> Vec<ReplicationDelta> {
        self.pending.drain(..).collect()
    }
}

/// Presentation-side, read-only view of one creature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragonReplica {
    state: ReplicatedState,
    curve: LifeStageConfig,
}

impl DragonReplica {
    pub fn new(curve: LifeStageConfig) -> Self {
        Self {
            state: ReplicatedState::initial(curve.adult_start),
            curve,
        }
    }

    pub fn apply(&mut self, delta: &ReplicationDelta) {
        delta.apply_to(&mut self.state);
    }

    pub fn state(&self) -> &ReplicatedState {
        &self.state
    }

    pub fn is_flying(&self) -> bool {
        self.state.flying
    }

    pub fn is_saddled(&self) -> bool {
        self.state.saddled
    }

    pub fn ticks_alive(&self) -> u32 {
        self.state.ticks_alive
    }

    pub fn life_stage(&self) -> LifeStage {
        self.curve.stage_at(self.state.ticks_alive)
    }

    pub fn scale(&self) -> f32 {
        self.curve.scale_at(self.state.ticks_alive)
    }
}
