//! Minimal [`ItemOracle`] backed by an in-memory map.
use std::collections::HashMap;

use dragon_content::ItemDefinition;
use dragon_core::{ItemClass, ItemId, ItemOracle};

pub struct ItemOracleImpl {
    definitions: HashMap<ItemId, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut oracle = Self::new();
        for definition in definitions {
            oracle.add_definition(definition);
        }
        oracle
    }

    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.id, def);
    }

    pub fn definition(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.definitions.get(&id)
    }

    /// Looks an item up by catalog name.
    pub fn find(&self, name: &str) -> Option<ItemId> {
        self.definitions
            .values()
            .find(|def| def.name == name)
            .map(|def| def.id)
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn classify(&self, item: ItemId) -> ItemClass {
        self.definitions
            .get(&item)
            .map(|def| def.class)
            .unwrap_or_default()
    }

    fn claims_interaction(&self, item: ItemId) -> bool {
        self.definitions
            .get(&item)
            .is_some_and(|def| def.claims_interaction)
    }
}
