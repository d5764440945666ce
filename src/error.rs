//! Error types.
//!
//! Scoring never fails. Errors come only from the layers around it:
//! reading configuration and accepting raw slider input.

use crate::decision::Feature;

/// Result type alias using [`DemoError`].
pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has wrong field types
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A slider produced NaN or an infinity
    #[error("weight for {feature:?} must be finite, got {value}")]
    NonFiniteWeight { feature: Feature, value: f64 },
}
