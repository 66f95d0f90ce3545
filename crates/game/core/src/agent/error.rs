use crate::error::{ErrorSeverity, GameError};
use crate::state::{AbilityError, EntityId};

/// Command sent to an agent that cannot honour it.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum AgentError {
    #[error("agent {0} is not the player")]
    NotAPlayer(EntityId),

    #[error("agent {0} is not an enemy")]
    NotAnEnemy(EntityId),

    #[error(transparent)]
    Ability(#[from] AbilityError),
}

impl GameError for AgentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotAPlayer(_) | Self::NotAnEnemy(_) => ErrorSeverity::Internal,
            Self::Ability(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAPlayer(_) => "AGENT_NOT_A_PLAYER",
            Self::NotAnEnemy(_) => "AGENT_NOT_AN_ENEMY",
            Self::Ability(err) => err.error_code(),
        }
    }
}
