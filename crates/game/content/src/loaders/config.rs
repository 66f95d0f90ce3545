//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use chase_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
///
/// Absent keys keep their defaults, so a file holding only `enemy_speed = 250.0`
/// is a complete configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders a configuration back to TOML, e.g. to write a starter file.
    pub fn to_toml(config: &GameConfig) -> LoadResult<String> {
        toml::to_string_pretty(config).context("Failed to serialize config TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enemy_speed = 250.0\nstun_duration = 1.5").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.enemy_speed, 250.0);
        assert_eq!(config.stun_duration, 1.5);
        assert_eq!(config.player_speed, GameConfig::DEFAULT_PLAYER_SPEED);
        assert_eq!(config.cell_size, GameConfig::DEFAULT_CELL_SIZE);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("cell_size = -1.0").unwrap_err();
        assert!(err.to_string().contains("cell size"), "{err}");
    }

    #[test]
    fn defaults_survive_a_round_trip() {
        let text = ConfigLoader::to_toml(&GameConfig::default()).unwrap();
        assert_eq!(ConfigLoader::parse(&text).unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/chase.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chase.toml"));
    }
}
