//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use dragon_core::DragonConfig;

use crate::loaders::{
    BreedDefinition, BreedLoader, ConfigLoader, ItemDefinition, ItemLoader, LoadResult,
};

/// Content factory that loads all simulation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── breeds.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load simulation configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<DragonConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load breed table from `breeds.ron`.
    pub fn load_breeds(&self) -> LoadResult<Vec<BreedDefinition>> {
        BreedLoader::load(&self.data_dir.join("breeds.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
