//! Runtime configuration read from the environment.
use std::env;

use chase_core::GameConfig;

/// Session-level settings around the core [`GameConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Seed for map generation.
    pub seed: u64,
    pub map_width: u32,
    pub map_height: u32,
    /// Fixed simulation rate used by headless drivers.
    pub frame_hz: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_SEED: u64 = 0;
    pub const DEFAULT_MAP_WIDTH: u32 = 20;
    pub const DEFAULT_MAP_HEIGHT: u32 = 15;
    pub const DEFAULT_FRAME_HZ: u32 = 60;

    /// Construct runtime configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CHASE_SEED` - map generation seed (default: 0)
    /// - `CHASE_MAP_WIDTH` / `CHASE_MAP_HEIGHT` - generated map size (default: 20x15)
    /// - `CHASE_FRAME_HZ` - simulation frames per second (default: 60, minimum 1)
    ///
    /// Malformed values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("CHASE_SEED") {
            config.seed = seed;
        }
        if let Some(width) = read_env::<u32>("CHASE_MAP_WIDTH") {
            config.map_width = width;
        }
        if let Some(height) = read_env::<u32>("CHASE_MAP_HEIGHT") {
            config.map_height = height;
        }
        if let Some(hz) = read_env::<u32>("CHASE_FRAME_HZ") {
            config.frame_hz = hz.max(1);
        }

        config
    }

    /// Seconds per simulated frame.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_hz.max(1) as f32
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: Self::DEFAULT_SEED,
            map_width: Self::DEFAULT_MAP_WIDTH,
            map_height: Self::DEFAULT_MAP_HEIGHT,
            frame_hz: Self::DEFAULT_FRAME_HZ,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_dt_matches_rate() {
        let config = RuntimeConfig {
            frame_hz: 50,
            ..RuntimeConfig::default()
        };
        assert_eq!(config.frame_dt(), 0.02);
        assert_eq!(RuntimeConfig::default().map_width, 20);
    }
}
