use std::path::PathBuf;

use thiserror::Error;

use crate::model::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid configuration: {player_count} players (expected 2 to 4)")]
    InvalidConfiguration { player_count: usize },
    #[error("invalid sabotage target: player {target}")]
    InvalidTarget { target: PlayerId },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead { path: PathBuf, source: std::io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_display() {
        assert_eq!(
            EngineError::InvalidConfiguration { player_count: 5 }.to_string(),
            "invalid configuration: 5 players (expected 2 to 4)"
        );
        assert_eq!(EngineError::InvalidTarget { target: 3 }.to_string(), "invalid sabotage target: player 3");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("roll_delay_ms must be <= 10000".into());
        assert_eq!(err.to_string(), "config validation error: roll_delay_ms must be <= 10000");
    }
}
