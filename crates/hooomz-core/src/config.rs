//! Service configuration
//!
//! Loaded from a TOML file; every field has a default so an empty file is a
//! valid config.

use crate::error::OpsError;
use hooomz_match::RuleConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_data_dir() -> PathBuf {
    PathBuf::from("./hooomz-data")
}

fn default_feed_limit() -> usize {
    50
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpsConfig {
    /// Directory the JSON store writes into
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Activity feed page size
    #[serde(default = "default_feed_limit")]
    pub feed_limit: usize,
    /// Company-specific matcher rules, consulted before the built-ins
    #[serde(default)]
    pub matcher_rules: Vec<RuleConfig>,
}

impl OpsConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns `OpsError::Config` for unreadable or malformed files.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, OpsError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| OpsError::Config(format!("{}: {err}", path.display())))?;
        toml::from_str(&text).map_err(|err| OpsError::Config(format!("{}: {err}", path.display())))
    }
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            feed_limit: default_feed_limit(),
            matcher_rules: Vec::new(),
        }
    }
}
