use crate::error::{ErrorSeverity, GameError};
use crate::motion::GridSpec;

/// Game configuration constants and tunable parameters.
///
/// Distances are world units, durations are seconds, speeds are world units
/// per second. Missing fields fall back to [`GameConfig::default`] when the
/// configuration is deserialized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Edge length of one grid cell, shared by every agent and the map.
    pub cell_size: f32,
    /// Squared distance under which an agent counts as arrived at its target.
    pub arrival_epsilon_sq: f32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    /// Half-extent of the agent collision box on every axis.
    pub agent_half_extent: f32,
    pub max_fuel: f32,
    /// Fuel burned per second while the player has a non-zero direction.
    pub fuel_burn_rate: f32,
    /// Fuel paid for one smoke release.
    pub ability_cost: f32,
    pub stun_duration: f32,
    /// Seconds a released smoke cloud stays in the world.
    pub smoke_lifespan: f32,
    pub smoke_half_extent: f32,
    pub flag_radius: f32,
    pub flag_score: u32,
    /// Seconds after the start during which enemies cannot catch the player.
    pub grace_period: f32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CELL_SIZE: f32 = 100.0;
    pub const DEFAULT_ARRIVAL_EPSILON_SQ: f32 = 10.0;
    pub const DEFAULT_PLAYER_SPEED: f32 = 300.0;
    pub const DEFAULT_ENEMY_SPEED: f32 = 200.0;
    pub const DEFAULT_AGENT_HALF_EXTENT: f32 = 40.0;
    pub const DEFAULT_MAX_FUEL: f32 = 100.0;
    pub const DEFAULT_FUEL_BURN_RATE: f32 = 5.0;
    pub const DEFAULT_ABILITY_COST: f32 = 10.0;
    pub const DEFAULT_STUN_DURATION: f32 = 3.0;
    pub const DEFAULT_SMOKE_LIFESPAN: f32 = 2.0;
    pub const DEFAULT_SMOKE_HALF_EXTENT: f32 = 45.0;
    pub const DEFAULT_FLAG_RADIUS: f32 = 30.0;
    pub const DEFAULT_FLAG_SCORE: u32 = 100;

    pub fn new() -> Self {
        Self {
            cell_size: Self::DEFAULT_CELL_SIZE,
            arrival_epsilon_sq: Self::DEFAULT_ARRIVAL_EPSILON_SQ,
            player_speed: Self::DEFAULT_PLAYER_SPEED,
            enemy_speed: Self::DEFAULT_ENEMY_SPEED,
            agent_half_extent: Self::DEFAULT_AGENT_HALF_EXTENT,
            max_fuel: Self::DEFAULT_MAX_FUEL,
            fuel_burn_rate: Self::DEFAULT_FUEL_BURN_RATE,
            ability_cost: Self::DEFAULT_ABILITY_COST,
            stun_duration: Self::DEFAULT_STUN_DURATION,
            smoke_lifespan: Self::DEFAULT_SMOKE_LIFESPAN,
            smoke_half_extent: Self::DEFAULT_SMOKE_HALF_EXTENT,
            flag_radius: Self::DEFAULT_FLAG_RADIUS,
            flag_score: Self::DEFAULT_FLAG_SCORE,
            grace_period: 0.0,
        }
    }

    /// Checks the invariants the motion controller relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("agent_half_extent", self.agent_half_extent),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("max_fuel", self.max_fuel),
            ("fuel_burn_rate", self.fuel_burn_rate),
            ("ability_cost", self.ability_cost),
            ("stun_duration", self.stun_duration),
            ("smoke_lifespan", self.smoke_lifespan),
            ("smoke_half_extent", self.smoke_half_extent),
            ("flag_radius", self.flag_radius),
            ("grace_period", self.grace_period),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        let half_cell = self.cell_size * 0.5;
        if !(self.arrival_epsilon_sq >= 0.0) || self.arrival_epsilon_sq >= half_cell * half_cell {
            return Err(ConfigError::EpsilonTooLarge {
                epsilon_sq: self.arrival_epsilon_sq,
                cell_size: self.cell_size,
            });
        }
        if self.ability_cost > self.max_fuel {
            return Err(ConfigError::AbilityCostExceedsFuel {
                cost: self.ability_cost,
                max_fuel: self.max_fuel,
            });
        }
        Ok(())
    }

    /// Grid parameters consumed by the motion controller.
    pub fn grid(&self) -> GridSpec {
        GridSpec::new(self.cell_size, self.arrival_epsilon_sq)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(f32),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("arrival epsilon² {epsilon_sq} is too large for cell size {cell_size}")]
    EpsilonTooLarge { epsilon_sq: f32, cell_size: f32 },

    #[error("ability cost {cost} exceeds fuel capacity {max_fuel}")]
    AbilityCostExceedsFuel { cost: f32, max_fuel: f32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveCellSize(_) => "CONFIG_NON_POSITIVE_CELL_SIZE",
            Self::NonPositive { .. } => "CONFIG_NON_POSITIVE",
            Self::Negative { .. } => "CONFIG_NEGATIVE",
            Self::EpsilonTooLarge { .. } => "CONFIG_EPSILON_TOO_LARGE",
            Self::AbilityCostExceedsFuel { .. } => "CONFIG_ABILITY_COST_EXCEEDS_FUEL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_cell_size() {
        let config = GameConfig {
            cell_size: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveCellSize(0.0))
        );
    }

    #[test]
    fn rejects_epsilon_comparable_to_cell() {
        let config = GameConfig {
            arrival_epsilon_sq: 2500.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EpsilonTooLarge { .. })
        ));
    }

    #[test]
    fn rejects_nan_speed() {
        let config = GameConfig {
            enemy_speed: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "enemy_speed",
                ..
            })
        ));
    }

    #[test]
    fn rejects_ability_that_can_never_be_paid() {
        let config = GameConfig {
            ability_cost: 150.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AbilityCostExceedsFuel { .. })
        ));
    }
}
