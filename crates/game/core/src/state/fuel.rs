use crate::error::{ErrorSeverity, GameError};

/// Player fuel, bounded to `[0, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelTank {
    current: f32,
    max: f32,
}

impl FuelTank {
    /// Full tank with the given capacity.
    pub fn full(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    /// Tank holding `current`, clamped into `[0, max]`.
    pub fn with_level(current: f32, max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: current.clamp(0.0, max),
            max,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// Burns up to `amount`, clamping at zero. Returns the fuel actually burned.
    pub fn burn(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current - amount.max(0.0)).max(0.0);
        before - self.current
    }

    /// Pays `cost` if the tank holds at least that much; otherwise leaves the
    /// level untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AbilityError::InsufficientFuel`] when `cost` exceeds the level.
    pub fn try_spend(&mut self, cost: f32) -> Result<(), AbilityError> {
        if self.current < cost {
            return Err(AbilityError::InsufficientFuel {
                required: cost,
                available: self.current,
            });
        }
        self.current -= cost;
        Ok(())
    }
}

/// Refused player ability.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum AbilityError {
    #[error("ability needs {required} fuel but only {available} is left")]
    InsufficientFuel { required: f32, available: f32 },
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFuel { .. } => "ABILITY_INSUFFICIENT_FUEL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burn_clamps_at_zero() {
        let mut tank = FuelTank::with_level(3.0, 100.0);
        assert_eq!(tank.burn(5.0), 3.0);
        assert_eq!(tank.current(), 0.0);
        assert!(tank.is_empty());
        assert_eq!(tank.burn(1.0), 0.0);
        assert_eq!(tank.current(), 0.0);
    }

    #[test]
    fn spend_refused_when_short() {
        let mut tank = FuelTank::with_level(8.0, 100.0);
        let err = tank.try_spend(10.0).unwrap_err();
        assert_eq!(
            err,
            AbilityError::InsufficientFuel {
                required: 10.0,
                available: 8.0
            }
        );
        assert_eq!(tank.current(), 8.0);
        assert!(err.severity().is_recoverable());
    }

    #[test]
    fn spend_exact_level_empties_tank() {
        let mut tank = FuelTank::with_level(10.0, 100.0);
        assert_eq!(tank.try_spend(10.0), Ok(()));
        assert_eq!(tank.current(), 0.0);
    }

    #[test]
    fn level_is_clamped_to_capacity() {
        assert_eq!(FuelTank::with_level(150.0, 100.0).current(), 100.0);
        assert_eq!(FuelTank::with_level(-4.0, 100.0).current(), 0.0);
    }
}
