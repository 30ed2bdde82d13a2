//! Repository contract for saving and loading creatures.

use dragon_core::EntityId;

use super::{Result, SavedDragon};

/// Persists [`SavedDragon`] records keyed by creature id.
pub trait SnapshotRepository: Send + Sync {
    fn save(&self, saved: &SavedDragon) -> Result<()>;

    fn load(&self, id: EntityId) -> Result<Option<SavedDragon>>;

    fn exists(&self, id: EntityId) -> bool;

    fn delete(&self, id: EntityId) -> Result<()>;

    /// All stored ids, ascending.
    fn list_ids(&self) -> Result<Vec<EntityId>> {
        Ok(vec![])
    }
}
