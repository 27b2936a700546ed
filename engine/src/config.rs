use std::path::Path;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MAX_ROLL_DELAY_MS: u64 = 10_000;

/// Driver settings, loadable from JSON. Missing keys fall back to defaults.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Pause before a delayed roll is committed.
    pub roll_delay_ms: u64,
    /// Seed for reproducible dice; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self { EngineConfig { roll_delay_ms: 1000, seed: None } }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::FileRead { path: path.to_path_buf(), source })?;
        Self::from_json_str(&content)
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roll_delay_ms > MAX_ROLL_DELAY_MS {
            return Err(ConfigError::Validation(format!("roll_delay_ms must be <= {MAX_ROLL_DELAY_MS}")));
        }
        Ok(())
    }

    pub fn roll_delay(&self) -> Duration { Duration::from_millis(self.roll_delay_ms) }
}
