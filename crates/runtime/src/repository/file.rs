//! File-based SnapshotRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use dragon_core::EntityId;

use super::{RepositoryError, Result, SavedDragon, SnapshotRepository};

/// Stores each creature as `dragon_{id}.json`.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// reader never sees a half-written record.
pub struct FileSnapshotRepository {
    base_dir: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path(&self, id: EntityId) -> PathBuf {
        self.base_dir.join(format!("dragon_{}.json", id.0))
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, saved: &SavedDragon) -> Result<()> {
        let path = self.path(saved.id);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(saved)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved dragon {} to {}", saved.id, path.display());
        Ok(())
    }

    fn load(&self, id: EntityId) -> Result<Option<SavedDragon>> {
        let path = self.path(id);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let saved: SavedDragon =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!("Loaded dragon {} from {}", id, path.display());
        Ok(Some(saved))
    }

    fn exists(&self, id: EntityId) -> bool {
        self.path(id).exists()
    }

    fn delete(&self, id: EntityId) -> Result<()> {
        let path = self.path(id);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted dragon {}", id);
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<EntityId>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("dragon_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id.parse::<u32>()
            {
                ids.push(EntityId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
