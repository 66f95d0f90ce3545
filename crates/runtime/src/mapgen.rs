//! Seeded random map generation.
//!
//! Produces a bordered rectangle with scattered inner walls and flags. The
//! 3x3 corner around the player spawn is kept clear, as are both enemy spawn
//! cells. The same seed always yields the same layout.
use chase_core::{CellPos, MapLayout};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::MapGenError;

#[derive(Clone, Debug, PartialEq)]
pub struct MapGenerator {
    pub width: u32,
    pub height: u32,
    /// Probability that a free inner cell becomes a wall.
    pub wall_chance: f64,
    /// Probability that a free inner cell that is not a wall holds a flag.
    pub flag_chance: f64,
}

impl MapGenerator {
    pub const MIN_SIZE: u32 = 5;
    pub const SAFE_ZONE: i32 = 3;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn player_spawn(&self) -> CellPos {
        CellPos::new(1, 1)
    }

    /// Opposite corner, then the far end of the first row.
    pub fn enemy_spawns(&self) -> [CellPos; 2] {
        let (w, h) = (self.width as i32, self.height as i32);
        [CellPos::new(w - 2, h - 2), CellPos::new(w - 2, 1)]
    }

    pub fn generate(&self, seed: u64) -> Result<MapLayout, MapGenError> {
        if self.width < Self::MIN_SIZE || self.height < Self::MIN_SIZE {
            return Err(MapGenError::TooSmall {
                width: self.width,
                height: self.height,
                min: Self::MIN_SIZE,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut layout = MapLayout::new(self.width, self.height);
        let enemies = self.enemy_spawns();
        let (w, h) = (self.width as i32, self.height as i32);

        for x in 0..w {
            for y in 0..h {
                let cell = CellPos::new(x, y);
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    layout.walls.push(cell);
                    continue;
                }
                if x < Self::SAFE_ZONE && y < Self::SAFE_ZONE {
                    continue;
                }
                // Roll for every inner cell so spawns do not shift the sequence.
                let wall = rng.gen_bool(probability(self.wall_chance));
                let flag = !wall && rng.gen_bool(probability(self.flag_chance));
                if enemies.contains(&cell) {
                    continue;
                }
                if wall {
                    layout.walls.push(cell);
                } else if flag {
                    layout.flags.push(cell);
                }
            }
        }

        layout.enemy_spawns = enemies.to_vec();
        layout.player_spawn = Some(self.player_spawn());
        debug!(
            seed,
            width = self.width,
            height = self.height,
            walls = layout.walls.len(),
            flags = layout.flags.len(),
            "Generated map"
        );
        Ok(layout)
    }
}

fn probability(chance: f64) -> f64 {
    if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) }
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            wall_chance: 0.10,
            flag_chance: 0.05,
        }
    }
}
