//! Common error infrastructure for dragon-core.
//!
//! Domain errors (`BreedError`, `MountError`, `ConfigError`, `OracleError`)
//! live next to the operations that produce them. This module holds the
//! shared classification they all implement.
//!
//! # Design Principles
//!
//! - **Type Safety**: each operation has its own error type with specific variants
//! - **Severity Classification**: errors are categorized for host handling
//! - **Deterministic**: errors carry ids and values, never host state

/// Severity level of an error, used by hosts to pick a handling strategy.
///
/// - **Recoverable**: may succeed later with the same or another input
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that requires investigation
/// - **Fatal**: a broken precondition; the operation must not be continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later.
    ///
    /// Examples: a host oracle is not wired up yet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: mounting an unsaddled creature, inconsistent config
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - a programming error in the caller.
    ///
    /// Examples: breeding an ineligible pair
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller or the core.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all dragon-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who is at fault, not on impact
pub trait DragonError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
