//! Damage immunity: which sources a dragon shrugs off.

use crate::state::{DamageSource, DamageTags, EntityId};

/// Invulnerability rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DamageImmunityPolicy {
    immunities: DamageTags,
}

impl DamageImmunityPolicy {
    pub const fn new(immunities: DamageTags) -> Self {
        Self { immunities }
    }

    pub fn immunities(&self) -> DamageTags {
        self.immunities
    }

    pub fn grant(&mut self, tags: DamageTags) {
        self.immunities.insert(tags);
    }

    pub fn revoke(&mut self, tags: DamageTags) {
        self.immunities.remove(tags);
    }

    /// True if the damage comes from the creature itself, from its
    /// controlling rider, or carries a tag in the immunity set.
    pub fn is_invulnerable(
        &self,
        source: &DamageSource,
        this: EntityId,
        rider: Option<EntityId>,
    ) -> bool {
        if let Some(originator) = source.originator {
            if originator == this || Some(originator) == rider {
                return true;
            }
        }
        self.immunities.intersects(source.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELF: EntityId = EntityId(1);
    const RIDER: EntityId = EntityId(2);
    const STRANGER: EntityId = EntityId(3);

    #[test]
    fn ignores_own_and_rider_damage() {
        let policy = DamageImmunityPolicy::default();
        let own = DamageSource::caused_by(SELF, DamageTags::MOB_ATTACK);
        let rider = DamageSource::caused_by(RIDER, DamageTags::PLAYER_ATTACK);
        assert!(policy.is_invulnerable(&own, SELF, Some(RIDER)));
        assert!(policy.is_invulnerable(&rider, SELF, Some(RIDER)));
        assert!(!policy.is_invulnerable(&rider, SELF, None));
    }

    #[test]
    fn immunity_set_matches_tags() {
        let mut policy = DamageImmunityPolicy::new(DamageTags::IN_FIRE | DamageTags::LAVA);
        assert!(policy.is_invulnerable(&DamageSource::new(DamageTags::LAVA), SELF, None));
        assert!(!policy.is_invulnerable(&DamageSource::new(DamageTags::DROWN), SELF, None));

        policy.revoke(DamageTags::LAVA);
        assert!(!policy.is_invulnerable(&DamageSource::new(DamageTags::LAVA), SELF, None));

        let hit = DamageSource::caused_by(STRANGER, DamageTags::IN_FIRE);
        assert!(policy.is_invulnerable(&hit, SELF, None));
    }
}
