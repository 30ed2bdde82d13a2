//! Unified error type surfaced by the runtime.
//!
//! Wraps core rejections, missing oracles and repository failures so the
//! binary can bubble them up with consistent context.

use dragon_core::{
    BreedError, ConfigError, DragonError, EntityId, ErrorSeverity, MountError, OracleError,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no dragon with id {0}")]
    UnknownDragon(EntityId),

    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error(transparent)]
    Breed(#[from] BreedError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Severity of the underlying error, for choosing a log level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownDragon(_) => ErrorSeverity::Validation,
            Self::Config(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
            Self::Mount(err) => err.severity(),
            Self::Breed(err) => err.severity(),
            Self::Repository(_) => ErrorSeverity::Internal,
        }
    }
}
