//! Breed table loader.

use std::path::Path;

use dragon_core::{Breed, DamageTags};
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Default damage immunities of one breed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedDefinition {
    pub breed: Breed,
    #[serde(default)]
    pub immunities: DamageTags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BreedTableFile {
    breeds: Vec<BreedDefinition>,
}

/// Loader for the breed table from RON files.
///
/// Immunities are written as bitflag expressions, e.g.
/// `"IN_FIRE | ON_FIRE | LAVA"`.
pub struct BreedLoader;

impl BreedLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BreedDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BreedDefinition>> {
        // DamageTags is a newtype around its flag text
        let table: BreedTableFile = ron::Options::default()
            .with_default_extension(Extensions::UNWRAP_NEWTYPES)
            .from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse breed table RON: {}", e))?;
        Ok(table.breeds)
    }
}
