//! Two-state stun machine for enemies.
//!
//! A stun event sets the countdown to a fixed duration (resetting, never
//! extending, an ongoing stun). Each tick while stunned decrements it by
//! `dt`; the tick on which it reaches zero returns the enemy to active.

/// Active or stunned with the seconds left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StunState {
    #[default]
    Active,
    Stunned {
        remaining: f32,
    },
}

/// Outcome of one stun tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StunTick {
    /// Not stunned; the agent moves this tick.
    Active,
    /// Still stunned after subtracting `dt`.
    Stunned { remaining: f32 },
    /// Countdown reached zero this tick. The agent stays still until the next.
    Recovered,
}

impl StunState {
    pub fn stun(&mut self, duration: f32) {
        *self = StunState::Stunned {
            remaining: duration.max(0.0),
        };
    }

    pub fn is_stunned(&self) -> bool {
        matches!(self, StunState::Stunned { .. })
    }

    pub fn remaining(&self) -> f32 {
        match self {
            StunState::Active => 0.0,
            StunState::Stunned { remaining } => *remaining,
        }
    }

    pub fn tick(&mut self, dt: f32) -> StunTick {
        match *self {
            StunState::Active => StunTick::Active,
            StunState::Stunned { remaining } => {
                let remaining = remaining - dt.max(0.0);
                if remaining <= 0.0 {
                    *self = StunState::Active;
                    StunTick::Recovered
                } else {
                    *self = StunState::Stunned { remaining };
                    StunTick::Stunned { remaining }
                }
            }
        }
    }
}
