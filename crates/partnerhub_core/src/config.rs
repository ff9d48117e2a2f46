//! Store configuration.
//!
//! Defaults match the dashboard prototype; hosts may override them from a
//! JSON object such as `{"storageKey": "...", "seedOnFirstLoad": false}`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known key the whole snapshot document lives under.
pub const DEFAULT_STORAGE_KEY: &str = "partnerhub.prototype-db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    pub storage_key: String,
    /// Seed the deterministic dataset when the first load finds nothing.
    pub seed_on_first_load: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_on_first_load: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    EmptyStorageKey,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid store config: {err}"),
            Self::EmptyStorageKey => write!(f, "storage key must not be blank"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::EmptyStorageKey => None,
        }
    }
}

impl StoreConfig {
    /// Parses overrides; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Json)?;
        config.validated()
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Result<Self, ConfigError> {
        self.storage_key = key.into();
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.storage_key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.storage_key = trimmed.to_string();
        Ok(self)
    }
}
