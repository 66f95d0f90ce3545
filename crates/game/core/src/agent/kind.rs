use crate::config::GameConfig;
use crate::intent::IntentBuffer;
use crate::state::FuelTank;
use crate::stun::StunState;

/// Player-only state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerExtra {
    pub intent: IntentBuffer,
    pub fuel: FuelTank,
    /// Fuel per second burned while the heading is non-zero.
    pub burn_rate: f32,
    pub ability_cost: f32,
}

impl PlayerExtra {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            intent: IntentBuffer::new(),
            fuel: FuelTank::full(config.max_fuel),
            burn_rate: config.fuel_burn_rate,
            ability_cost: config.ability_cost,
        }
    }
}

/// Enemy-only state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyExtra {
    pub stun: StunState,
    pub stun_duration: f32,
}

impl EnemyExtra {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            stun: StunState::Active,
            stun_duration: config.stun_duration,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Player(PlayerExtra),
    Enemy(EnemyExtra),
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Player(_) => "player",
            AgentKind::Enemy(_) => "enemy",
        }
    }
}
