//! Narrow capability traits the host's AI and interaction code program
//! against. [`Dragon`] implements all of them.

use crate::dragon::{Dragon, MountError, TameOutcome, mate_eligible};
use crate::state::{Actor, DamageSource, EntityId};

pub trait Tameable {
    fn owner(&self) -> Option<EntityId>;

    fn is_tamed(&self) -> bool {
        self.owner().is_some()
    }

    fn is_owned_by(&self, actor: EntityId) -> bool {
        self.owner() == Some(actor)
    }

    fn attempt_tame(&mut self, actor: EntityId, success: bool) -> TameOutcome;
}

pub trait Mountable {
    fn can_mount(&self, actor: EntityId) -> bool;

    fn mount(&mut self, actor: &Actor) -> Result<(), MountError>;

    fn unmount(&mut self) -> Option<EntityId>;

    fn controlling_passenger(&self) -> Option<EntityId>;
}

pub trait Breedable {
    fn reproduction_count(&self) -> u8;

    fn can_mate_with(&self, other: &Self) -> bool;
}

pub trait Damageable {
    fn health(&self) -> f32;

    fn is_invulnerable_to(&self, source: &DamageSource) -> bool;

    fn hurt(&mut self, source: &DamageSource, amount: f32) -> bool;
}

impl Tameable for Dragon {
    fn owner(&self) -> Option<EntityId> {
        Dragon::owner(self)
    }

    fn attempt_tame(&mut self, actor: EntityId, success: bool) -> TameOutcome {
        Dragon::attempt_tame(self, actor, success)
    }
}

impl Mountable for Dragon {
    fn can_mount(&self, actor: EntityId) -> bool {
        Dragon::can_mount(self, actor)
    }

    fn mount(&mut self, actor: &Actor) -> Result<(), MountError> {
        Dragon::mount(self, actor)
    }

    fn unmount(&mut self) -> Option<EntityId> {
        Dragon::unmount(self)
    }

    fn controlling_passenger(&self) -> Option<EntityId> {
        Dragon::controlling_passenger(self)
    }
}

impl Breedable for Dragon {
    fn reproduction_count(&self) -> u8 {
        Dragon::reproduction_count(self)
    }

    fn can_mate_with(&self, other: &Self) -> bool {
        mate_eligible(self, other)
    }
}

impl Damageable for Dragon {
    fn health(&self) -> f32 {
        Dragon::health(self)
    }

    fn is_invulnerable_to(&self, source: &DamageSource) -> bool {
        Dragon::is_invulnerable_to(self, source)
    }

    fn hurt(&mut self, source: &DamageSource, amount: f32) -> bool {
        Dragon::hurt(self, source, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dragon::test_support::*;
    use crate::state::DamageTags;

    fn tame_through<T: Tameable>(creature: &mut T, actor: EntityId) -> bool {
        creature.attempt_tame(actor, true) == TameOutcome::Tamed && creature.is_owned_by(actor)
    }

    fn total_damage<D: Damageable>(creature: &mut D, hits: &[f32]) -> f32 {
        let before = creature.health();
        for &amount in hits {
            creature.hurt(&DamageSource::new(DamageTags::GENERIC), amount);
        }
        before - creature.health()
    }

    #[test]
    fn dragon_is_tameable() {
        let mut dragon = wild(1);
        assert!(tame_through(&mut dragon, OWNER));
        assert!(Tameable::is_tamed(&dragon));
    }

    #[test]
    fn dragon_is_damageable() {
        let mut dragon = wild(1);
        assert_eq!(total_damage(&mut dragon, &[1.0, 2.5]), 3.5);
    }

    #[test]
    fn dragon_is_mountable() {
        let mut dragon = saddled(1);
        let seat: &mut dyn Mountable = &mut dragon;
        assert!(seat.can_mount(OWNER));
        seat.mount(&Actor::new(OWNER)).unwrap();
        assert_eq!(seat.controlling_passenger(), Some(OWNER));
    }
}
