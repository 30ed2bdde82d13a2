use dragon_core::{Breed, Dragon, EntityId, PersistedSnapshot, Vec3};
use serde::{Deserialize, Serialize};

/// One stored creature: identity plus the persisted snapshot fields.
///
/// The snapshot keys (`Saddle`, `TicksAlive`, `ReproCount`) are flattened into
/// the same object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedDragon {
    pub id: EntityId,
    pub breed: Breed,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityId>,
    #[serde(default)]
    pub position: Vec3,
    #[serde(flatten)]
    pub snapshot: PersistedSnapshot,
}

impl SavedDragon {
    pub fn capture(dragon: &Dragon) -> Self {
        Self {
            id: dragon.id(),
            breed: dragon.breed(),
            name: dragon.custom_name().map(str::to_owned),
            owner: dragon.owner(),
            position: dragon.body().position,
            snapshot: dragon.snapshot(),
        }
    }
}
