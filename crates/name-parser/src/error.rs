//! Error types for name-parser
//!
//! Normalization itself never fails; errors only come from loading a
//! [`NormalizerConfig`](crate::NormalizerConfig).

use thiserror::Error;

/// Result type alias for name-parser operations
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Main error type for name-parser operations
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for a normalizer config
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written as TOML
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
