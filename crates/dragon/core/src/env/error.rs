use crate::error::{DragonError, ErrorSeverity};

/// A host oracle required by the requested operation was not provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("sensor oracle not available")]
    SensorsNotAvailable,

    #[error("rider input oracle not available")]
    RidersNotAvailable,

    #[error("navigation factory not available")]
    NavigationNotAvailable,

    #[error("item oracle not available")]
    ItemsNotAvailable,
}

impl DragonError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SensorsNotAvailable => "ORACLE_SENSORS",
            Self::RidersNotAvailable => "ORACLE_RIDERS",
            Self::NavigationNotAvailable => "ORACLE_NAVIGATION",
            Self::ItemsNotAvailable => "ORACLE_ITEMS",
        }
    }
}
