//! Error types for node configuration resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, extracting, or rendering a node configuration.
///
/// Every variant is fatal to configuration resolution. Soft degradations
/// (a missing config file, a missing policy file) are logged instead and
/// never surface here.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid keys in validator config: {}", .0.join(", "))]
    InvalidKeys(Vec<String>),

    #[error("Unable to load validator configuration file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse validator configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidValue { key: String, expected: &'static str },

    #[error("Invalid {field} '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Environment override error: {0}")]
    Environment(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Environment(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err.to_string())
    }
}
