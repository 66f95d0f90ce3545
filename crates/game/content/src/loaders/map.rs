//! Map layout loader.
//!
//! Two formats are accepted. RON files list cells explicitly:
//!
//! ```ron
//! (
//!     dimensions: (7, 5),
//!     border: true,
//!     walls: [(3, 2)],
//!     flags: [(5, 1)],
//!     enemies: [(5, 3)],
//!     player: Some((1, 1)),
//! )
//! ```
//!
//! Any other extension is read as an ASCII grid.

use std::path::Path;

use anyhow::{Context, bail};
use chase_core::{CellPos, MapLayout};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    /// Surround the map with walls.
    #[serde(default)]
    border: bool,
    #[serde(default)]
    walls: Vec<(i32, i32)>,
    #[serde(default)]
    flags: Vec<(i32, i32)>,
    #[serde(default)]
    enemies: Vec<(i32, i32)>,
    #[serde(default)]
    player: Option<(i32, i32)>,
}

/// Loader for map layouts.
pub struct MapLoader;

impl MapLoader {
    /// Loads a layout, picking the format from the file extension.
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        let layout = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::parse_ron(&content),
            _ => Self::parse_ascii(&content),
        };
        layout.with_context(|| format!("Invalid map {}", path.display()))
    }

    pub fn parse_ascii(content: &str) -> LoadResult<MapLayout> {
        Ok(MapLayout::from_ascii(content)?)
    }

    pub fn parse_ron(content: &str) -> LoadResult<MapLayout> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let (width, height) = data.dimensions;
        let mut layout = MapLayout::new(width, height);
        if data.border {
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    if x == 0 || y == 0 || x == width as i32 - 1 || y == height as i32 - 1 {
                        layout.walls.push(CellPos::new(x, y));
                    }
                }
            }
        }

        let cell = |(x, y): (i32, i32), what: &str| -> LoadResult<CellPos> {
            let pos = CellPos::new(x, y);
            if !layout.contains(pos) {
                bail!("{what} at ({x}, {y}) lies outside the {width}x{height} map");
            }
            Ok(pos)
        };
        let walls = data
            .walls
            .into_iter()
            .map(|c| cell(c, "wall"))
            .collect::<LoadResult<Vec<_>>>()?;
        let flags = data
            .flags
            .into_iter()
            .map(|c| cell(c, "flag"))
            .collect::<LoadResult<Vec<_>>>()?;
        let enemies = data
            .enemies
            .into_iter()
            .map(|c| cell(c, "enemy"))
            .collect::<LoadResult<Vec<_>>>()?;
        let player = data.player.map(|c| cell(c, "player")).transpose()?;

        for wall in walls {
            if !layout.walls.contains(&wall) {
                layout.walls.push(wall);
            }
        }
        layout.flags = flags;
        layout.enemy_spawns = enemies;
        layout.player_spawn = player;
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ROOM: &str = r#"(
        dimensions: (7, 5),
        border: true,
        walls: [(3, 2), (0, 0)],
        flags: [(5, 1)],
        enemies: [(5, 3)],
        player: Some((1, 1)),
    )"#;

    #[test]
    fn ron_layout_with_border() {
        let layout = MapLoader::parse_ron(ROOM).unwrap();
        assert_eq!((layout.width, layout.height), (7, 5));
        // 2 * 7 + 2 * 3 border cells plus one inner wall; (0, 0) is not doubled.
        assert_eq!(layout.walls.len(), 21);
        assert!(layout.is_wall(CellPos::new(3, 2)));
        assert_eq!(layout.player_spawn, Some(CellPos::new(1, 1)));
        assert_eq!(layout.enemy_spawns, vec![CellPos::new(5, 3)]);
    }

    #[test]
    fn out_of_bounds_cells_are_rejected() {
        let err = MapLoader::parse_ron("(dimensions: (4, 4), flags: [(9, 1)])").unwrap_err();
        assert!(err.to_string().contains("flag at (9, 1)"), "{err}");
    }

    #[test]
    fn extension_selects_format() {
        let dir = tempfile::tempdir().unwrap();
        let ascii = dir.path().join("room.txt");
        std::fs::File::create(&ascii)
            .unwrap()
            .write_all(b"#####\n#P.E#\n#####\n")
            .unwrap();
        let ron_path = dir.path().join("room.ron");
        std::fs::write(&ron_path, ROOM).unwrap();

        let from_ascii = MapLoader::load(&ascii).unwrap();
        assert_eq!(from_ascii.player_spawn, Some(CellPos::new(1, 1)));
        assert_eq!(from_ascii.enemy_spawns, vec![CellPos::new(3, 1)]);

        let from_ron = MapLoader::load(&ron_path).unwrap();
        assert_eq!(from_ron.flags, vec![CellPos::new(5, 1)]);
    }

    #[test]
    fn bad_glyph_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, "#?#").unwrap();
        let err = MapLoader::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.txt"));
        assert!(format!("{err:#}").contains("unknown glyph"));
    }
}
