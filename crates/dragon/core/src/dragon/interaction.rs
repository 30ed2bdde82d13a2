//! Right-click interaction protocol.
//!
//! Branches are tried in a fixed priority order and the first match wins.
//! Both sides select the same branch; only the authoritative side mutates the
//! creature, consumes items or draws random numbers.

use crate::env::{Env, HeldItem, ItemClass, ItemOracle, OracleError, RandomSource};
use crate::state::Actor;

use super::Dragon;

/// Which half of the split simulation is handling the interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Simulating side; owns all state.
    Authoritative,
    /// Presentation side; reads replicated state only.
    Presentation,
}

/// Handled on the presentation side (primary), handled on the simulating side
/// (secondary), or not handled at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionOutcome {
    HandledPrimary,
    HandledSecondary,
    NotHandled,
}

impl InteractionOutcome {
    fn handled_on(side: Side) -> Self {
        match side {
            Side::Presentation => Self::HandledPrimary,
            Side::Authoritative => Self::HandledSecondary,
        }
    }

    pub fn is_handled(self) -> bool {
        !matches!(self, Self::NotHandled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum InteractionBranch {
    /// The held item runs its own interaction.
    ItemSpecific,
    Heal { amount: f32 },
    EquipSaddle,
    Tame,
    ToggleSit,
    Mount,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionReport {
    pub branch: Option<InteractionBranch>,
    pub outcome: InteractionOutcome,
}

/// Picks the branch an interaction would take without changing anything.
pub fn select_interaction(
    dragon: &Dragon,
    actor: &Actor,
    held: &HeldItem,
    items: &dyn ItemOracle,
) -> Option<InteractionBranch> {
    let item = held.item.filter(|_| !held.is_empty());

    if let Some(item) = item {
        if items.claims_interaction(item) {
            return Some(InteractionBranch::ItemSpecific);
        }
    }

    let class = item.map(|item| items.classify(item)).unwrap_or_default();
    let owned = dragon.is_owned_by(actor.id);

    if let ItemClass::Food { healing } = class {
        if dragon.health_fraction() < 1.0 {
            return Some(InteractionBranch::Heal { amount: healing });
        }
    }

    if class == ItemClass::Saddle
        && owned
        && dragon.life_stage().is_adult()
        && !dragon.is_saddled()
    {
        return Some(InteractionBranch::EquipSaddle);
    }

    if class == ItemClass::Courtship && !dragon.is_tamed() {
        return Some(InteractionBranch::Tame);
    }

    if owned && actor.sneaking {
        return Some(InteractionBranch::ToggleSit);
    }

    if class != ItemClass::Courtship && dragon.can_mount(actor.id) {
        return Some(InteractionBranch::Mount);
    }

    None
}

impl Dragon {
    /// [`Dragon::interact`] with the item oracle taken from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::ItemsNotAvailable`] before anything changes if
    /// `env` has no item oracle.
    pub fn interact_in<R: RandomSource + ?Sized>(
        &mut self,
        side: Side,
        actor: &Actor,
        held: &mut HeldItem,
        env: &Env<'_>,
        rng: &mut R,
    ) -> Result<InteractionReport, OracleError> {
        let items = env.items()?;
        Ok(self.interact(side, actor, held, items, rng))
    }

    /// Handles `actor` using `held` on this creature.
    ///
    /// On [`Side::Authoritative`] the selected branch is applied: one unit of
    /// the held item is consumed for heal, saddle and tame, and a tame attempt
    /// succeeds with probability `1 / taming.success_odds`. On
    /// [`Side::Presentation`] nothing changes and `rng` is not touched.
    pub fn interact<R: RandomSource + ?Sized>(
        &mut self,
        side: Side,
        actor: &Actor,
        held: &mut HeldItem,
        items: &dyn ItemOracle,
        rng: &mut R,
    ) -> InteractionReport {
        let branch = if self.is_dying() || self.is_removed() {
            None
        } else {
            select_interaction(self, actor, held, items)
        };

        let Some(branch) = branch else {
            return InteractionReport {
                branch: None,
                outcome: InteractionOutcome::NotHandled,
            };
        };

        if side == Side::Authoritative {
            self.apply_interaction(branch, actor, held, rng);
        }

        InteractionReport {
            branch: Some(branch),
            outcome: InteractionOutcome::handled_on(side),
        }
    }

    fn apply_interaction<R: RandomSource + ?Sized>(
        &mut self,
        branch: InteractionBranch,
        actor: &Actor,
        held: &mut HeldItem,
        rng: &mut R,
    ) {
        match branch {
            InteractionBranch::ItemSpecific => {}
            InteractionBranch::Heal { amount } => {
                held.shrink();
                self.heal(amount);
            }
            InteractionBranch::EquipSaddle => {
                held.shrink();
                self.equip_saddle();
            }
            InteractionBranch::Tame => {
                held.shrink();
                let success = rng.one_in(self.config.taming.success_odds);
                self.attempt_tame(actor.id, success);
            }
            InteractionBranch::ToggleSit => self.toggle_sit(),
            InteractionBranch::Mount => {
                let mounted = self.mount(actor);
                debug_assert!(mounted.is_ok(), "mount selected with unmet preconditions");
            }
        }
    }
}
