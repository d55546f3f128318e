//! Config facade: resolve the effective snapshot from every layer.

use super::merge::merge_configs;
use super::paths::PathConfig;
use super::sources::{environment, file};
use super::NodeConfig;
use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

/// Loads and layers node configuration.
///
/// Precedence, highest first: command-line overrides, `NODECONF_*`
/// environment variables, the config file, built-in defaults.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    paths: PathConfig,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader using paths resolved from the process environment.
    pub fn new() -> Self {
        Self::with_paths(PathConfig::load())
    }

    pub fn with_paths(paths: PathConfig) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &PathConfig {
        &self.paths
    }

    /// Built-in defaults for a bare node.
    pub fn load_default_config() -> NodeConfig {
        NodeConfig::default_node()
    }

    /// Load one config file, compiling permissions against the policy directory.
    pub fn load_toml_config(&self, path: &Path) -> Result<NodeConfig, ConfigError> {
        file::load_toml_config(path, &self.paths.policy_dir)
    }

    /// Resolve with environment overrides read from the process environment.
    pub fn resolve(
        &self,
        overrides: &NodeConfig,
        config_file: Option<&Path>,
    ) -> Result<NodeConfig, ConfigError> {
        let environment = environment::environment_overrides()?;
        self.resolve_layers(overrides, &environment, config_file)
    }

    /// Merge `[overrides, environment, file, defaults]` into one snapshot.
    ///
    /// `config_file` falls back to the default location under the config
    /// directory when not given.
    pub fn resolve_layers(
        &self,
        overrides: &NodeConfig,
        environment: &NodeConfig,
        config_file: Option<&Path>,
    ) -> Result<NodeConfig, ConfigError> {
        let default_file = self.paths.config_file();
        let config_file = config_file.unwrap_or(default_file.as_path());
        let from_file = self.load_toml_config(config_file)?;

        let layers = [
            overrides.clone(),
            environment.clone(),
            from_file,
            Self::load_default_config(),
        ];
        let merged = merge_configs(&layers);
        debug!(config_file = %config_file.display(), "Resolved node configuration");
        Ok(merged)
    }
}
