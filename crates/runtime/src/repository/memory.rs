//! In-memory SnapshotRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use dragon_core::EntityId;

use super::{RepositoryError, Result, SavedDragon, SnapshotRepository};

#[derive(Default)]
pub struct InMemorySnapshotRepo {
    saved: RwLock<HashMap<EntityId, SavedDragon>>,
}

impl InMemorySnapshotRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for InMemorySnapshotRepo {
    fn save(&self, saved: &SavedDragon) -> Result<()> {
        let mut map = self
            .saved
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        map.insert(saved.id, saved.clone());
        Ok(())
    }

    fn load(&self, id: EntityId) -> Result<Option<SavedDragon>> {
        let map = self
            .saved
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(map.get(&id).cloned())
    }

    fn exists(&self, id: EntityId) -> bool {
        self.saved
            .read()
            .map(|map| map.contains_key(&id))
            .unwrap_or(false)
    }

    fn delete(&self, id: EntityId) -> Result<()> {
        let mut map = self
            .saved
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        map.remove(&id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<EntityId>> {
        let map = self
            .saved
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<EntityId> = map.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
