//! Held-item classification for the interaction protocol.

/// Opaque item identifier assigned by the host's item registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// What the interaction protocol cares about for a given item.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemClass {
    /// Recognized food; heals by `healing` points.
    Food { healing: f32 },
    Saddle,
    /// Courtship item: used to tame, never mounts.
    Courtship,
    #[default]
    Other,
}

/// Stack held by the interacting actor. `item == None` is an empty hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HeldItem {
    pub item: Option<ItemId>,
    pub count: u32,
}

impl HeldItem {
    pub const fn empty() -> Self {
        Self {
            item: None,
            count: 0,
        }
    }

    pub const fn of(item: ItemId, count: u32) -> Self {
        Self {
            item: Some(item),
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none() || self.count == 0
    }

    /// Consumes one unit; the hand empties when the last unit goes.
    pub fn shrink(&mut self) {
        self.count = self.count.saturating_sub(1);
        if self.count == 0 {
            self.item = None;
        }
    }
}

/// Item registry queries used while interacting with a creature.
pub trait ItemOracle: Send + Sync {
    fn classify(&self, item: ItemId) -> ItemClass;

    /// True if the item runs its own interaction (spawn eggs, name tags, ...)
    /// and the creature's protocol must not run.
    fn claims_interaction(&self, _item: ItemId) -> bool {
        false
    }
}
