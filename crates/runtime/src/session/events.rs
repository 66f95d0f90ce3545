//! Notifications raised while a session runs.
use chase_core::{EntityId, Vec3};
use serde::{Deserialize, Serialize};

/// Something a frontend may want to react to, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    FlagCollected {
        flag: EntityId,
        score: u32,
        remaining: usize,
    },
    SmokeReleased {
        smoke: EntityId,
        position: Vec3,
        fuel_left: f32,
    },
    SmokeExpired {
        smoke: EntityId,
    },
    EnemyStunned {
        enemy: EntityId,
        smoke: EntityId,
    },
    EnemyRecovered {
        enemy: EntityId,
    },
    PlayerCaught {
        enemy: EntityId,
    },
    Victory {
        score: u32,
    },
}

impl GameEvent {
    /// True for the events that end the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::PlayerCaught { .. } | GameEvent::Victory { .. })
    }
}
