//! Environment override source: `NODECONF_*` variables.
//!
//! Recognised variables map one-to-one onto snapshot fields:
//! `NODECONF_BIND_NETWORK`, `NODECONF_BIND_COMPONENT`, `NODECONF_ENDPOINT`,
//! `NODECONF_PEERING`, `NODECONF_SEEDS`, `NODECONF_PEERS`,
//! `NODECONF_SCHEDULER`, `NODECONF_OPENTSDB_URL` and `NODECONF_OPENTSDB_DB`.
//! Seeds and peers are comma-separated. Other `NODECONF_*` variables are ignored.

use crate::config::NodeConfig;
use crate::error::ConfigError;
use config::{Config, Environment};

/// Prefix shared by every override variable.
pub const ENV_PREFIX: &str = "NODECONF";

/// Separator for the `seeds` and `peers` lists.
pub const LIST_SEPARATOR: char = ',';

/// Snapshot of the overrides present in the process environment.
pub fn environment_overrides() -> Result<NodeConfig, ConfigError> {
    from_environment(base_environment())
}

/// Snapshot of the overrides present in `vars` (full variable names).
pub fn environment_overrides_from<I, K, V>(vars: I) -> Result<NodeConfig, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars: config::Map<String, String> = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    from_environment(base_environment().source(Some(vars)))
}

// Values stay strings: no numeric or boolean coercion, lists split here.
fn base_environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
}

fn from_environment(environment: Environment) -> Result<NodeConfig, ConfigError> {
    let settings = Config::builder().add_source(environment).build()?;

    Ok(NodeConfig {
        bind_network: string(&settings, "bind_network")?,
        bind_component: string(&settings, "bind_component")?,
        endpoint: string(&settings, "endpoint")?,
        peering: string(&settings, "peering")?,
        seeds: list(&settings, "seeds")?,
        peers: list(&settings, "peers")?,
        scheduler: string(&settings, "scheduler")?,
        opentsdb_url: string(&settings, "opentsdb_url")?,
        opentsdb_db: string(&settings, "opentsdb_db")?,
        ..NodeConfig::default()
    })
}

fn string(settings: &Config, key: &str) -> Result<Option<String>, ConfigError> {
    match settings.get_string(key) {
        Ok(value) => Ok(Some(value)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn list(settings: &Config, key: &str) -> Result<Option<Vec<String>>, ConfigError> {
    Ok(string(settings, key)?.map(|value| {
        value
            .split(LIST_SEPARATOR)
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }))
}
