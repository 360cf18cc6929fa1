//! Engine configuration loaded from TOML.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use game_core::SearchLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid evaluation weights: {0}")]
    InvalidWeights(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for a [`HeuristicEngine`](crate::HeuristicEngine).
///
/// ```toml
/// name = "tactical"
/// max_depth = 4
/// move_time_ms = 2000
/// time_buffer_ms = 100
///
/// [weights]
/// material = 0.7
/// mobility = 0.3
/// ```
///
/// Every field is optional; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub name: String,
    /// Plies searched before the evaluator takes over
    pub max_depth: u32,
    /// Budget per move; `None` searches to `max_depth` regardless of time
    pub move_time_ms: Option<u64>,
    /// Safety margin subtracted from the move budget
    pub time_buffer_ms: u64,
    /// Feature weights for a [`WeightedEvaluator`](crate::WeightedEvaluator)
    pub weights: BTreeMap<String, f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "Heuristic alpha-beta".to_string(),
            max_depth: 3,
            move_time_ms: None,
            time_buffer_ms: 100,
            weights: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks the settings that serde cannot.
    ///
    /// Weight names are checked against an extractor later, in
    /// [`WeightedEvaluator::new`](crate::WeightedEvaluator::new).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".to_string()));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        match self.move_time_ms {
            Some(move_time) if move_time <= self.time_buffer_ms => {
                Err(ConfigError::Invalid(format!(
                    "move_time_ms ({move_time}) must exceed time_buffer_ms ({})",
                    self.time_buffer_ms
                )))
            }
            _ => Ok(()),
        }
    }

    /// Depth and time limits described by this config.
    pub fn limits(&self) -> SearchLimits {
        let limits = SearchLimits::depth(self.max_depth)
            .with_time_buffer(Duration::from_millis(self.time_buffer_ms));
        match self.move_time_ms {
            Some(ms) => limits.with_move_time(Duration::from_millis(ms)),
            None => limits,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
