//! Content loaders for reading simulation data from files.

pub mod breeds;
pub mod config;
pub mod factory;
pub mod items;

pub use breeds::{BreedDefinition, BreedLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use items::{ItemDefinition, ItemLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
