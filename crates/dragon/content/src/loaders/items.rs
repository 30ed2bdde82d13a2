//! Item catalog loader.

use std::path::Path;

use dragon_core::{ItemClass, ItemId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One entry of the item catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub class: ItemClass,
    /// Item runs its own interaction instead of the creature's.
    #[serde(default)]
    pub claims_interaction: bool,
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = std::collections::HashSet::new();
        for item in &catalog.items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate item id {} ({})", item.id.0, item.name);
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_item_classes() {
        let items = ItemLoader::parse(
            r#"(
                items: [
                    (id: (1), name: "porkchop", class: Food(healing: 8.0)),
                    (id: (2), name: "saddle", class: Saddle),
                    (id: (3), name: "stick"),
                    (id: (4), name: "spawn_egg", claims_interaction: true),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].class, ItemClass::Food { healing: 8.0 });
        assert_eq!(items[1].class, ItemClass::Saddle);
        assert_eq!(items[2].class, ItemClass::Other);
        assert!(items[3].claims_interaction);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ItemLoader::parse(
            r#"(items: [(id: (1), name: "a"), (id: (1), name: "b")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate item id 1"));
    }
}
