//! Breed-specific defaults.

use crate::state::{Breed, DamageTags};

/// Per-breed data the core needs when a creature is created.
pub trait BreedOracle: Send + Sync {
    /// Damage tags a freshly created creature of `breed` ignores.
    fn immunities(&self, breed: Breed) -> DamageTags;
}

/// Built-in table used when the host does not load one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBreedTable;

impl BreedOracle for DefaultBreedTable {
    fn immunities(&self, breed: Breed) -> DamageTags {
        match breed {
            Breed::Fire | Breed::Nether => {
                DamageTags::IN_FIRE | DamageTags::ON_FIRE | DamageTags::LAVA
            }
            Breed::Water => DamageTags::DROWN,
            Breed::Aether => DamageTags::LIGHTNING,
            Breed::End => DamageTags::MAGIC,
            Breed::Forest | Breed::Ghost | Breed::Ice => DamageTags::empty(),
        }
    }
}
