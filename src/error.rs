use std::path::PathBuf;

use crate::board::Pos;

/// Errors returned when a move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,

    #[error("position {0} is off the board")]
    OutOfBounds(Pos),

    #[error("position {0} is already occupied")]
    Occupied(Pos),

    #[error("not your turn")]
    NotYourTurn,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::Occupied(Pos::new(3, 4)).to_string(),
            "position (3, 4) is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.defense_weight must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.defense_weight must be > 0"
        );
    }
}
