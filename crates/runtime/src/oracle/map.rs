//! Static map layout served through [`chase_core::ObstructionOracle`].
use chase_core::{MapLayout, ObstructionOracle, StaticGeometry, SweepQuery, Vec3};
use glam::Vec2;

/// ObstructionOracle implementation with static map data.
///
/// Walls come from the layout. Sweeps that would leave the map rectangle are
/// blocked too, so layouts without a border wall still keep agents inside.
pub struct MapOracleImpl {
    layout: MapLayout,
    cell_size: f32,
    geometry: StaticGeometry,
    /// Outer edges of the border cells on the ground plane.
    min: Vec2,
    max: Vec2,
}

impl MapOracleImpl {
    pub fn new(layout: MapLayout, cell_size: f32) -> Self {
        let geometry = layout.geometry(cell_size);
        let half = cell_size * 0.5;
        let min = Vec2::splat(-half);
        let max = Vec2::new(
            layout.width as f32 * cell_size - half,
            layout.height as f32 * cell_size - half,
        );
        Self {
            layout,
            cell_size,
            geometry,
            min,
            max,
        }
    }

    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn geometry(&self) -> &StaticGeometry {
        &self.geometry
    }

    fn inside(&self, point: Vec3) -> bool {
        point.x > self.min.x && point.y > self.min.y && point.x < self.max.x && point.y < self.max.y
    }
}

impl ObstructionOracle for MapOracleImpl {
    fn can_move_to(&self, query: &SweepQuery) -> bool {
        self.inside(query.to) && self.geometry.can_move_to(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chase_core::{CellPos, EntityId};

    fn sweep(from: CellPos, to: CellPos) -> SweepQuery {
        SweepQuery {
            agent: EntityId(1),
            half_extent: Vec3::splat(40.0),
            from: MapLayout::cell_center(from, 100.0),
            to: MapLayout::cell_center(to, 100.0),
        }
    }

    #[test]
    fn leaving_the_map_is_blocked() {
        let oracle = MapOracleImpl::new(MapLayout::new(3, 3), 100.0);
        assert!(oracle.can_move_to(&sweep(CellPos::new(1, 1), CellPos::new(2, 1))));
        assert!(oracle.can_move_to(&sweep(CellPos::new(0, 0), CellPos::new(0, 1))));
        assert!(!oracle.can_move_to(&sweep(CellPos::new(2, 1), CellPos::new(3, 1))));
        assert!(!oracle.can_move_to(&sweep(CellPos::new(0, 0), CellPos::new(0, -1))));
    }

    #[test]
    fn walls_block() {
        let mut layout = MapLayout::new(3, 3);
        layout.walls.push(CellPos::new(1, 1));
        let oracle = MapOracleImpl::new(layout, 100.0);
        assert!(!oracle.can_move_to(&sweep(CellPos::new(0, 1), CellPos::new(1, 1))));
        assert_eq!(oracle.geometry().len(), 1);
    }
}
