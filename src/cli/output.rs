//! CLI output: error mapping from configuration errors to the CLI surface.

use crate::error::ConfigError;

/// Map configuration errors to a string for CLI output.
pub fn map_error(e: &ConfigError) -> String {
    match e {
        ConfigError::InvalidKeys(_) | ConfigError::InvalidValue { .. } => {
            format!("{}\nAllowed keys: {}", e, crate::config::RECOGNIZED_KEYS.join(", "))
        }
        _ => e.to_string(),
    }
}
