//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required oracle was not wired into the [`super::Env`].
///
/// These are fatal: an agent cannot validate a single move without them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ObstructionOracle is not available in the environment.
    #[error("ObstructionOracle not available")]
    ObstructionNotAvailable,

    /// ReferenceProvider is not available in the environment.
    #[error("ReferenceProvider not available")]
    ReferenceNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::ObstructionNotAvailable => "ORACLE_OBSTRUCTION_NOT_AVAILABLE",
            OracleError::ReferenceNotAvailable => "ORACLE_REFERENCE_NOT_AVAILABLE",
        }
    }
}
