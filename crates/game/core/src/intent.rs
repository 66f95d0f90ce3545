//! Player turn queuing.
//!
//! Input events latch a single direction. The latch is consulted on every
//! arrival and is never cleared by reading it, so a turn pressed early is
//! taken at the first intersection where it fits.
use crate::env::ObstructionOracle;
use crate::motion::MoveProbe;
use crate::state::{CardinalDirection, Heading};

/// What the player did at an arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum IntentTurn {
    /// Adopted the latched direction.
    Turned,
    /// Kept the current heading.
    Continued,
    /// Current heading blocked; stopped.
    Stopped,
    /// Standing still with nothing adoptable.
    Idle,
}

/// Depth-one buffer of the most recent directional input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntentBuffer {
    queued: Heading,
}

impl IntentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any unconsumed input.
    pub fn latch(&mut self, direction: CardinalDirection) {
        self.queued = Some(direction);
    }

    pub fn queued(&self) -> Heading {
        self.queued
    }

    /// Heading to commit at an arrival, given the heading the player had.
    pub fn resolve<O: ObstructionOracle + ?Sized>(
        &self,
        current: Heading,
        probe: &MoveProbe<'_, O>,
    ) -> (Heading, IntentTurn) {
        if let Some(queued) = self.queued.filter(|&queued| probe.is_clear(queued)) {
            return (Some(queued), IntentTurn::Turned);
        }
        match current {
            Some(direction) if probe.is_clear(direction) => (current, IntentTurn::Continued),
            Some(_) => (None, IntentTurn::Stopped),
            None => (None, IntentTurn::Idle),
        }
    }
}
