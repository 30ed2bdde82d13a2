use bitflags::bitflags;

use super::common::EntityId;

bitflags! {
    /// Damage-source tags.
    ///
    /// A [`DamageSource`] normally carries exactly one tag; immunity sets are
    /// arbitrary unions of tags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DamageTags: u16 {
        const GENERIC       = 1 << 0;
        const FALL          = 1 << 1;
        const IN_FIRE       = 1 << 2;
        const ON_FIRE       = 1 << 3;
        const LAVA          = 1 << 4;
        const DROWN         = 1 << 5;
        const IN_WALL       = 1 << 6;
        const CACTUS        = 1 << 7;
        const MAGIC         = 1 << 8;
        const WITHER        = 1 << 9;
        const EXPLOSION     = 1 << 10;
        const MOB_ATTACK    = 1 << 11;
        const PLAYER_ATTACK = 1 << 12;
        const PROJECTILE    = 1 << 13;
        const LIGHTNING     = 1 << 14;
    }
}

/// Incoming damage as reported by the host: who caused it and what kind it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageSource {
    /// Entity ultimately responsible (the shooter for projectiles), if any.
    pub originator: Option<EntityId>,
    pub tags: DamageTags,
}

impl DamageSource {
    pub const fn new(tags: DamageTags) -> Self {
        Self {
            originator: None,
            tags,
        }
    }

    pub const fn caused_by(originator: EntityId, tags: DamageTags) -> Self {
        Self {
            originator: Some(originator),
            tags,
        }
    }
}
