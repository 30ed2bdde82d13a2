//! Presentation-side mirror of replicated creature state.
//!
//! A mirror never simulates. It starts every creature from the replicated
//! defaults and applies [`SyncMessage`]s in order, deriving life stage and
//! scale locally from the replicated age.

use std::collections::BTreeMap;

use dragon_core::{DragonReplica, EntityId, LifeStageConfig};
use tracing::{debug, warn};

use crate::simulation::SyncMessage;

#[derive(Debug)]
pub struct PresentationMirror {
    curve: LifeStageConfig,
    replicas: BTreeMap<EntityId, DragonReplica>,
}

impl PresentationMirror {
    pub fn new(curve: LifeStageConfig) -> Self {
        Self {
            curve,
            replicas: BTreeMap::new(),
        }
    }

    pub fn apply(&mut self, messages: &[SyncMessage]) {
        for message in messages {
            match message {
                SyncMessage::Spawned(id) => {
                    self.replicas.insert(*id, DragonReplica::new(self.curve));
                }
                SyncMessage::Delta(delta) => match self.replicas.get_mut(&delta.entity) {
                    Some(replica) => {
                        replica.apply(delta);
                        debug!("Mirror applied {:?} to {}", delta.fields, delta.entity);
                    }
                    None => warn!("Delta for unknown dragon {}", delta.entity),
                },
                SyncMessage::Removed(id) => {
                    self.replicas.remove(id);
                }
            }
        }
    }

    pub fn replica(&self, id: EntityId) -> Option<&DragonReplica> {
        self.replicas.get(&id)
    }

    pub fn len(&self) -> usize {
        self.replicas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replicas.is_empty()
    }
}
