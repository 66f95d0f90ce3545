//! Static map layout: which cells hold walls, flags and spawns.
use glam::Vec3;

use super::StaticGeometry;
use crate::error::{ErrorSeverity, GameError};
use crate::geometry::Aabb;

/// Cell coordinates on the map lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Immutable description of a level, independent of cell size.
///
/// Cell `(x, y)` is centred at world `(x * cell, y * cell, FLOOR_HEIGHT)`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapLayout {
    pub width: u32,
    pub height: u32,
    pub walls: Vec<CellPos>,
    pub flags: Vec<CellPos>,
    pub enemy_spawns: Vec<CellPos>,
    pub player_spawn: Option<CellPos>,
}

impl MapLayout {
    /// Height at which every actor and wall is placed.
    pub const FLOOR_HEIGHT: f32 = 50.0;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32
    }

    pub fn is_wall(&self, cell: CellPos) -> bool {
        self.walls.contains(&cell)
    }

    pub fn cell_center(cell: CellPos, cell_size: f32) -> Vec3 {
        Vec3::new(
            cell.x as f32 * cell_size,
            cell.y as f32 * cell_size,
            Self::FLOOR_HEIGHT,
        )
    }

    /// Cell whose center is nearest to `position` on the ground plane.
    pub fn cell_at(position: Vec3, cell_size: f32) -> CellPos {
        CellPos::new(
            (position.x / cell_size).round() as i32,
            (position.y / cell_size).round() as i32,
        )
    }

    /// Wall boxes filling their whole cell.
    pub fn geometry(&self, cell_size: f32) -> StaticGeometry {
        StaticGeometry::new(
            self.walls
                .iter()
                .map(|&cell| Aabb::cube(Self::cell_center(cell, cell_size), cell_size * 0.5))
                .collect(),
        )
    }

    /// Parses a text map, one line per row starting at `y = 0`.
    ///
    /// Glyphs: `#` wall, `F` flag, `E` enemy spawn, `P` player spawn, `.` or
    /// space floor. Blank leading and trailing lines are ignored.
    ///
    /// # Errors
    ///
    /// Rejects empty maps, rows of different widths, unknown glyphs and more
    /// than one player spawn.
    pub fn from_ascii(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .skip_while(|line| line.trim().is_empty())
            .collect();
        let rows: Vec<&str> = match rows.iter().rposition(|line| !line.trim().is_empty()) {
            Some(last) => rows[..=last].to_vec(),
            None => return Err(LayoutError::Empty),
        };

        let width = rows[0].chars().count();
        let mut layout = Self::new(width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell = CellPos::new(x as i32, y as i32);
                match glyph {
                    '#' => layout.walls.push(cell),
                    'F' => layout.flags.push(cell),
                    'E' => layout.enemy_spawns.push(cell),
                    'P' => {
                        if layout.player_spawn.replace(cell).is_some() {
                            return Err(LayoutError::DuplicatePlayer(cell));
                        }
                    }
                    '.' | ' ' => {}
                    other => return Err(LayoutError::UnknownGlyph { glyph: other, cell }),
                }
            }
        }
        Ok(layout)
    }
}

/// Malformed map layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("map layout is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at {cell:?}")]
    UnknownGlyph { glyph: char, cell: CellPos },

    #[error("second player spawn at {0:?}")]
    DuplicatePlayer(CellPos),
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "LAYOUT_EMPTY",
            Self::RaggedRow { .. } => "LAYOUT_RAGGED_ROW",
            Self::UnknownGlyph { .. } => "LAYOUT_UNKNOWN_GLYPH",
            Self::DuplicatePlayer(_) => "LAYOUT_DUPLICATE_PLAYER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ObstructionOracle, SweepQuery};
    use crate::state::EntityId;

    const ARENA: &str = "
#####
#P.E#
#.#F#
#####
";

    #[test]
    fn parses_glyphs_into_cells() {
        let layout = MapLayout::from_ascii(ARENA).expect("valid arena");
        assert_eq!((layout.width, layout.height), (5, 4));
        assert_eq!(layout.player_spawn, Some(CellPos::new(1, 1)));
        assert_eq!(layout.enemy_spawns, vec![CellPos::new(3, 1)]);
        assert_eq!(layout.flags, vec![CellPos::new(3, 2)]);
        assert!(layout.is_wall(CellPos::new(2, 2)));
        assert!(!layout.is_wall(CellPos::new(2, 1)));
        assert_eq!(layout.walls.len(), 15);
    }

    #[test]
    fn positions_round_to_nearest_cell() {
        let cell = CellPos::new(3, 2);
        assert_eq!(MapLayout::cell_at(MapLayout::cell_center(cell, 100.0), 100.0), cell);
        assert_eq!(
            MapLayout::cell_at(Vec3::new(349.0, 151.0, 50.0), 100.0),
            CellPos::new(3, 2)
        );
    }

    #[test]
    fn trailing_spaces_are_floor() {
        let layout = MapLayout::from_ascii("#P  \n####\n").unwrap();
        assert_eq!((layout.width, layout.height), (4, 2));
        assert_eq!(layout.player_spawn, Some(CellPos::new(1, 0)));
        assert!(!layout.is_wall(CellPos::new(3, 0)));
        assert!(layout.is_wall(CellPos::new(3, 1)));

        let crlf = MapLayout::from_ascii("#P.\r\n###\r\n").unwrap();
        assert_eq!(crlf.width, 3);
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            MapLayout::from_ascii("###\n##\n"),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_second_player() {
        assert_eq!(
            MapLayout::from_ascii("PP"),
            Err(LayoutError::DuplicatePlayer(CellPos::new(1, 0)))
        );
        assert_eq!(MapLayout::from_ascii("\n \n"), Err(LayoutError::Empty));
    }

    #[test]
    fn geometry_blocks_the_inner_wall() {
        let layout = MapLayout::from_ascii(ARENA).expect("valid arena");
        let geometry = layout.geometry(100.0);
        let from = MapLayout::cell_center(CellPos::new(2, 1), 100.0);
        let query = |to: CellPos| SweepQuery {
            agent: EntityId::PLAYER,
            half_extent: Vec3::splat(40.0),
            from,
            to: MapLayout::cell_center(to, 100.0),
        };
        assert!(!geometry.can_move_to(&query(CellPos::new(2, 2))));
        assert!(geometry.can_move_to(&query(CellPos::new(1, 1))));
        assert!(geometry.can_move_to(&query(CellPos::new(3, 1))));
        assert!(!geometry.can_move_to(&query(CellPos::new(2, 0))));
    }
}
