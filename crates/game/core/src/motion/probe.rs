use glam::Vec3;

use super::GridSpec;
use crate::env::{ObstructionOracle, SweepQuery};
use crate::state::{CardinalDirection, EntityId};

/// Candidate one-cell moves from a fixed origin, checked against the oracle.
pub struct MoveProbe<'a, O: ObstructionOracle + ?Sized> {
    oracle: &'a O,
    agent: EntityId,
    half_extent: Vec3,
    origin: Vec3,
    cell_size: f32,
}

impl<'a, O: ObstructionOracle + ?Sized> MoveProbe<'a, O> {
    pub fn new(
        oracle: &'a O,
        agent: EntityId,
        half_extent: Vec3,
        origin: Vec3,
        grid: &GridSpec,
    ) -> Self {
        Self {
            oracle,
            agent,
            half_extent,
            origin,
            cell_size: grid.cell_size,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn destination(&self, direction: CardinalDirection) -> Vec3 {
        self.origin + direction.unit() * self.cell_size
    }

    /// True when the agent's box can sweep one cell in `direction`.
    pub fn is_clear(&self, direction: CardinalDirection) -> bool {
        self.oracle.can_move_to(&SweepQuery {
            agent: self.agent,
            half_extent: self.half_extent,
            from: self.origin,
            to: self.destination(direction),
        })
    }
}
