//! Plain data shared by every agent.
//!
//! Identifiers, grid directions and the player's fuel tank. The richer
//! per-agent record lives in [`crate::agent`].
mod common;
mod direction;
mod fuel;

pub use common::EntityId;
pub use direction::{Axis, CardinalDirection, Heading, heading_vector};
pub use fuel::{AbilityError, FuelTank};
