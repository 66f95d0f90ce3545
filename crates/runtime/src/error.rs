//! Error types surfaced by the runtime API.
use chase_core::{AgentError, ConfigError, ErrorSeverity, GameError, OracleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),

    #[error("map layout has no player spawn")]
    MissingPlayerSpawn,

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("session already finished")]
    Finished,
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(err) => err.severity(),
            Self::Agent(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
            Self::MissingPlayerSpawn | Self::Finished => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::Agent(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
            Self::MissingPlayerSpawn => "SESSION_MISSING_PLAYER_SPAWN",
            Self::Finished => "SESSION_FINISHED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapGenError {
    #[error("map must be at least {min}x{min}, got {width}x{height}")]
    TooSmall { width: u32, height: u32, min: u32 },
}

impl GameError for MapGenError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooSmall { .. } => "MAPGEN_TOO_SMALL",
        }
    }
}
