//! Configuration for the normalizer
//!
//! Only the set of null tokens is configurable. Whitespace trimming and entity
//! decoding have no knobs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Tokens treated as "no value" when no config is given.
pub const DEFAULT_NULL_TOKENS: [&str; 2] = ["NULL", "\\N"];

/// Normalizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Sentinels that mean "no value", matched case-insensitively after
    /// trimming. Replaces [`DEFAULT_NULL_TOKENS`]; the empty string is always
    /// a null token.
    pub null_tokens: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            null_tokens: DEFAULT_NULL_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl NormalizerConfig {
    /// Parse a config from a TOML string. Missing fields take their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the config to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            null_tokens = config.null_tokens.len(),
            "loaded normalizer config"
        );
        Ok(config)
    }
}
