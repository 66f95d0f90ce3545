//! Oracle fakes shared by the unit tests.
use glam::Vec3;

use crate::env::{MapLayout, ObstructionOracle, StaticGeometry, SweepQuery};
use crate::state::{Axis, CardinalDirection};

/// Nothing ever blocks.
pub struct OpenField;

impl ObstructionOracle for OpenField {
    fn can_move_to(&self, _query: &SweepQuery) -> bool {
        true
    }
}

/// Blocks every sweep heading in one of the listed directions, wherever it
/// starts.
pub struct BlockedDirections(pub Vec<CardinalDirection>);

impl BlockedDirections {
    pub fn all() -> Self {
        Self(CardinalDirection::SCAN_ORDER.to_vec())
    }
}

impl ObstructionOracle for BlockedDirections {
    fn can_move_to(&self, query: &SweepQuery) -> bool {
        match sweep_direction(query) {
            Some(direction) => !self.0.contains(&direction),
            None => true,
        }
    }
}

fn sweep_direction(query: &SweepQuery) -> Option<CardinalDirection> {
    let delta = query.to - query.from;
    let axis = if delta.x.abs() >= delta.y.abs() {
        Axis::X
    } else {
        Axis::Y
    };
    CardinalDirection::along(axis, axis.component(delta))
}

/// Wall boxes at the given cells of a `cell`-sized lattice.
pub fn walls(cells: &[(i32, i32)], cell: f32) -> StaticGeometry {
    let mut layout = MapLayout::new(0, 0);
    layout.walls = cells
        .iter()
        .map(|&(x, y)| crate::env::CellPos::new(x, y))
        .collect();
    layout.geometry(cell)
}

/// World position of a cell on the default floor.
pub fn cell(x: i32, y: i32, size: f32) -> Vec3 {
    MapLayout::cell_center(crate::env::CellPos::new(x, y), size)
}
