//! Builder configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock behavior: save under `"layout"`, drop target
//! `"droppable"`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DROP_TARGET_ID, DEFAULT_STORAGE_KEY};

/// Error returned by [`BuilderConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid builder config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

/// Tunables for a [`Builder`](crate::builder::Builder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Key the layout is persisted under.
    pub storage_key: String,
    /// Identifier of the canvas drop target.
    pub drop_target_id: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            drop_target_id: DEFAULT_DROP_TARGET_ID.to_owned(),
        }
    }
}

impl BuilderConfig {
    /// Parse a JSON config, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyStorageKey`] if `storage_key` is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(config)
    }
}
