//! Node config file source: a TOML file on disk.

use crate::config::extract::extract;
use crate::config::NodeConfig;
use crate::error::ConfigError;
use std::path::Path;
use tracing::info;

/// Load a snapshot from the TOML file at `path`.
///
/// A missing file is not an error: it yields an all-unset snapshot so the
/// lower-priority layers apply. An existing file that cannot be read, does
/// not parse, or carries unknown keys fails the whole load.
pub fn load_toml_config(path: &Path, policy_dir: &Path) -> Result<NodeConfig, ConfigError> {
    if !path.exists() {
        info!(
            "Skipping validator config loading from non-existent config file: {}",
            path.display()
        );
        return Ok(NodeConfig::default());
    }

    info!("Loading validator information from config: {}", path.display());

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let table: toml::Table = raw.parse().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    extract(&table, policy_dir)
}
