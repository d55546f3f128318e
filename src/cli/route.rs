//! CLI route: single route table and run context.

use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation::{
    format_check_summary, format_config_debug, format_config_json, format_config_toml,
    format_policies_json, format_policies_text,
};
use crate::config::{ConfigLoader, NodeConfig, PathConfig};
use crate::error::ConfigError;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: resolved paths plus the override layer.
pub struct RunContext {
    loader: ConfigLoader,
    config_path: Option<PathBuf>,
    overrides: NodeConfig,
    environment: Option<NodeConfig>,
}

impl RunContext {
    /// Build from parsed arguments; paths come from the environment unless overridden.
    pub fn new(cli: &Cli) -> Self {
        let mut paths = PathConfig::load();
        if let Some(policy_dir) = &cli.policy_dir {
            paths.policy_dir = policy_dir.clone();
        }
        debug!(
            config_dir = %paths.config_dir.display(),
            policy_dir = %paths.policy_dir.display(),
            "Resolved node paths"
        );

        Self {
            loader: ConfigLoader::with_paths(paths),
            config_path: cli.config.clone(),
            overrides: cli.overrides.to_config(),
            environment: None,
        }
    }

    /// Use a fixed environment layer instead of reading `NODECONF_*` variables.
    pub fn with_environment(mut self, environment: NodeConfig) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }

    /// Resolve the effective snapshot across every layer.
    pub fn resolve(&self) -> Result<NodeConfig, ConfigError> {
        let config_path = self.config_path.as_deref();
        match &self.environment {
            Some(environment) => {
                self.loader
                    .resolve_layers(&self.overrides, environment, config_path)
            }
            None => self.loader.resolve(&self.overrides, config_path),
        }
    }

    /// Execute a command, returning the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, ConfigError> {
        let config = self.resolve()?;

        match command {
            Commands::Show { format } => match format.as_str() {
                "toml" => format_config_toml(&config),
                "json" => format_config_json(&config),
                "debug" => Ok(format_config_debug(&config)),
                other => Err(ConfigError::InvalidChoice {
                    field: "format",
                    value: other.to_string(),
                }),
            },
            Commands::Check => {
                let peering = config.peering_mode()?;
                let scheduler = config.scheduler_kind()?;
                info!("Configuration check passed");
                Ok(format_check_summary(&config, peering, scheduler))
            }
            Commands::Policies { format } => match format.as_str() {
                "text" => Ok(format_policies_text(&config)),
                "json" => format_policies_json(&config),
                other => Err(ConfigError::InvalidChoice {
                    field: "format",
                    value: other.to_string(),
                }),
            },
        }
    }
}
