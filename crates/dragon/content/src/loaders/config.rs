//! Simulation configuration loader.

use std::path::Path;

use anyhow::Context;
use dragon_core::DragonConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`DragonConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config file.
    ///
    /// Missing tables and keys fall back to their defaults, so an empty file
    /// yields [`DragonConfig::default`].
    pub fn load(path: &Path) -> LoadResult<DragonConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<DragonConfig> {
        let config: DragonConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
