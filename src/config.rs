use std::path::Path;

use log::warn;

use crate::board::Mark;
use crate::engine::EngineConfig;
use crate::error::ConfigError;

/// Longest allowed artificial delay before the computer moves
const MAX_BOT_DELAY_MS: u64 = 10_000;

/// Match pacing settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before the computer answers, purely cosmetic
    pub bot_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { bot_delay_ms: 600 }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dark_mode: bool,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
    pub ui: UiConfig,
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.bot_mark == Mark::Empty {
            return Err(ConfigError::Validation(
                "engine.bot_mark must be X or O".into(),
            ));
        }
        if !self.engine.defense_weight.is_finite() || self.engine.defense_weight <= 0.0 {
            return Err(ConfigError::Validation(
                "engine.defense_weight must be a finite number > 0".into(),
            ));
        }
        if self.game.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.bot_delay_ms must be <= {MAX_BOT_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
