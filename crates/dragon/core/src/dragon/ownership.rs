//! Ownership and taming progress.

use crate::state::EntityId;

/// Result of a single tame attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TameOutcome {
    Tamed,
    Failed,
    /// Someone else already owns the creature; nothing changed.
    AlreadyOwned,
}

/// `Wild -> TameAttempt -> {Tamed | Wild}`.
///
/// Once an owner is set it is never cleared or replaced while the creature
/// lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OwnershipProtocol {
    owner: Option<EntityId>,
}

impl OwnershipProtocol {
    pub const fn wild() -> Self {
        Self { owner: None }
    }

    pub const fn owned_by(owner: EntityId) -> Self {
        Self { owner: Some(owner) }
    }

    pub fn is_tamed(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owner(&self) -> Option<EntityId> {
        self.owner
    }

    pub fn is_owned_by(&self, actor: EntityId) -> bool {
        self.owner == Some(actor)
    }

    pub fn attempt_tame(&mut self, actor: EntityId, success: bool) -> TameOutcome {
        match self.owner {
            Some(owner) if owner != actor => TameOutcome::AlreadyOwned,
            _ if success => {
                self.owner = Some(actor);
                TameOutcome::Tamed
            }
            _ => TameOutcome::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_attempt_leaves_creature_wild() {
        let mut ownership = OwnershipProtocol::wild();
        assert_eq!(
            ownership.attempt_tame(EntityId(7), false),
            TameOutcome::Failed
        );
        assert!(!ownership.is_tamed());
    }

    #[test]
    fn successful_attempt_sets_owner() {
        let mut ownership = OwnershipProtocol::wild();
        assert_eq!(ownership.attempt_tame(EntityId(7), true), TameOutcome::Tamed);
        assert!(ownership.is_owned_by(EntityId(7)));
        assert!(!ownership.is_owned_by(EntityId(8)));
    }

    #[test]
    fn second_tamer_never_replaces_owner() {
        let mut ownership = OwnershipProtocol::owned_by(EntityId(7));
        assert_eq!(
            ownership.attempt_tame(EntityId(8), true),
            TameOutcome::AlreadyOwned
        );
        assert_eq!(ownership.owner(), Some(EntityId(7)));
    }
}
