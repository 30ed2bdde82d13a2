use std::collections::HashMap;

use dragon_content::BreedDefinition;
use dragon_core::{Breed, BreedOracle, DamageTags, DefaultBreedTable};
use strum::IntoEnumIterator;

/// Breed table loaded from content. Breeds missing from the table have no
/// default immunities.
pub struct BreedOracleImpl {
    immunities: HashMap<Breed, DamageTags>,
}

impl BreedOracleImpl {
    pub fn from_definitions(definitions: impl IntoIterator<Item = BreedDefinition>) -> Self {
        Self {
            immunities: definitions
                .into_iter()
                .map(|def| (def.breed, def.immunities))
                .collect(),
        }
    }

    /// Table mirroring [`DefaultBreedTable`].
    pub fn builtin() -> Self {
        Self {
            immunities: Breed::iter()
                .map(|breed| (breed, DefaultBreedTable.immunities(breed)))
                .collect(),
        }
    }
}

impl BreedOracle for BreedOracleImpl {
    fn immunities(&self, breed: Breed) -> DamageTags {
        self.immunities.get(&breed).copied().unwrap_or_default()
    }
}
