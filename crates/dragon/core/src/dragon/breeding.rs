//! Mate eligibility, reproduction bookkeeping and offspring descriptors.

use crate::env::{NameFormatter, RandomSource};
use crate::error::{DragonError, ErrorSeverity};
use crate::state::{Breed, EntityId, Vec3};

use super::{Dragon, synthesize_name};

/// Reproduction counter and courtship flag of one individual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreedingProtocol {
    reproduction_count: u8,
    limit: u8,
    in_love: bool,
}

impl BreedingProtocol {
    pub const fn new(limit: u8) -> Self {
        Self {
            reproduction_count: 0,
            limit,
            in_love: false,
        }
    }

    pub fn reproduction_count(&self) -> u8 {
        self.reproduction_count
    }

    pub fn limit(&self) -> u8 {
        self.limit
    }

    pub fn at_limit(&self) -> bool {
        self.reproduction_count >= self.limit
    }

    pub fn is_in_love(&self) -> bool {
        self.in_love
    }

    pub fn set_in_love(&mut self, in_love: bool) {
        self.in_love = in_love;
    }

    pub(crate) fn restore_count(&mut self, count: u8) {
        self.reproduction_count = count.min(self.limit);
    }

    fn record_breeding(&mut self) {
        self.reproduction_count = self.reproduction_count.saturating_add(1).min(self.limit);
    }
}

/// First reason a pair cannot mate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MateRejection {
    #[error("{0} cannot mate with itself")]
    SameIndividual(EntityId),

    #[error("{0} is not tamed")]
    NotTamed(EntityId),

    #[error("{0} reached its reproduction limit")]
    ReproductionLimit(EntityId),

    #[error("{0} is not in love")]
    NotInLove(EntityId),
}

/// Breeding was invoked on a pair that is not eligible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BreedError {
    #[error("ineligible breeding pair: {0}")]
    Ineligible(#[from] MateRejection),
}

impl DragonError for BreedError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Ineligible(MateRejection::SameIndividual(_)) => "BREED_SAME_INDIVIDUAL",
            Self::Ineligible(MateRejection::NotTamed(_)) => "BREED_NOT_TAMED",
            Self::Ineligible(MateRejection::ReproductionLimit(_)) => "BREED_REPRODUCTION_LIMIT",
            Self::Ineligible(MateRejection::NotInLove(_)) => "BREED_NOT_IN_LOVE",
        }
    }
}

/// Everything the host needs to create the newborn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffspringDescriptor {
    pub parents: (EntityId, EntityId),
    pub position: Vec3,
    pub motion: Vec3,
    pub ticks_alive: u32,
    pub breed: Breed,
    pub name: Option<String>,
}

/// Checks a pair in a fixed order: identity, taming, limit, courtship.
///
/// The result is symmetric in whether the pair is eligible.
///
/// # Errors
///
/// Returns the first failed condition.
pub fn mate_check(a: &Dragon, b: &Dragon) -> Result<(), MateRejection> {
    if a.id() == b.id() {
        return Err(MateRejection::SameIndividual(a.id()));
    }
    for dragon in [a, b] {
        if !dragon.is_tamed() {
            return Err(MateRejection::NotTamed(dragon.id()));
        }
    }
    for dragon in [a, b] {
        if dragon.breeding().at_limit() {
            return Err(MateRejection::ReproductionLimit(dragon.id()));
        }
    }
    for dragon in [a, b] {
        if !dragon.is_in_love() {
            return Err(MateRejection::NotInLove(dragon.id()));
        }
    }
    Ok(())
}

pub fn mate_eligible(a: &Dragon, b: &Dragon) -> bool {
    mate_check(a, b).is_ok()
}

/// Breeds an eligible pair.
///
/// Increments both reproduction counts, draws the inherited breed, then
/// fuses the parents' names if both are named. The courtship flags are left
/// for the host to reset.
///
/// # Errors
///
/// Returns [`BreedError::Ineligible`] without touching either parent if the
/// pair fails [`mate_check`].
pub fn breed<R: RandomSource + ?Sized>(
    a: &mut Dragon,
    b: &mut Dragon,
    rng: &mut R,
    formatter: &dyn NameFormatter,
) -> Result<OffspringDescriptor, BreedError> {
    mate_check(a, b)?;

    a.breeding.record_breeding();
    b.breeding.record_breeding();

    let breed = if rng.next_bool() { a.breed() } else { b.breed() };

    let name = match (a.custom_name(), b.custom_name()) {
        (Some(first), Some(second)) => Some(synthesize_name(first, second, rng, formatter)),
        _ => None,
    };

    Ok(OffspringDescriptor {
        parents: (a.id(), b.id()),
        position: a.body().position,
        motion: Vec3::ZERO,
        ticks_alive: 0,
        breed,
        name,
    })
}
