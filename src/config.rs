use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_PLAYER1, DEFAULT_PLAYER2};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub players: PlayersConfig,
}

/// Pacing of the game loop.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay between gravity steps of a falling piece
    pub drop_speed_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { drop_speed_ms: 100 }
    }
}

/// Names offered by the name prompt.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player1: String,
    pub player2: String,
    /// Ask for names before the first game
    pub prompt: bool,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1: DEFAULT_PLAYER1.to_string(),
            player2: DEFAULT_PLAYER2.to_string(),
            prompt: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.drop_speed_ms == 0 {
            return Err(ConfigError::Validation(
                "game.drop_speed_ms must be > 0".into(),
            ));
        }
        if self.game.drop_speed_ms > 10_000 {
            return Err(ConfigError::Validation(
                "game.drop_speed_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.drop_speed_ms, 100);
        assert_eq!(config.players.player1, "Player 1");
        assert!(config.players.prompt);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
player1 = "Ada"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.player1, "Ada");
        // Other fields should be defaults
        assert_eq!(config.players.player2, "Player 2");
        assert_eq!(config.game.drop_speed_ms, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.drop_speed_ms, GameConfig::default().drop_speed_ms);
        assert!(config.players.prompt);
    }

    #[test]
    fn test_validation_rejects_zero_drop_speed() {
        let mut config = AppConfig::default();
        config.game.drop_speed_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_drop_speed() {
        let mut config = AppConfig::default();
        config.game.drop_speed_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.drop_speed_ms, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
drop_speed_ms = 40

[players]
prompt = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.drop_speed_ms, 40);
        assert!(!config.players.prompt);
        assert_eq!(config.players.player2, "Player 2");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[game]\ndrop_speed_ms = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[game\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
