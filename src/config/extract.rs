//! Field extraction: generic TOML tree -> typed snapshot.

use super::snapshot::NodeConfig;
use crate::error::ConfigError;
use crate::policy::compile_permissions;
use std::collections::BTreeMap;
use std::path::Path;
use toml::{Table, Value};

/// Top-level keys a node config file may contain. Anything else is rejected.
pub const RECOGNIZED_KEYS: [&str; 10] = [
    "bind",
    "endpoint",
    "peering",
    "seeds",
    "peers",
    "network_public_key",
    "network_private_key",
    "scheduler",
    "permissions",
    "roles",
];

/// Reject every key outside [`RECOGNIZED_KEYS`] in one error, sorted.
pub fn validate_keys(table: &Table) -> Result<(), ConfigError> {
    let mut invalid: Vec<String> = table
        .keys()
        .filter(|key| !RECOGNIZED_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    if invalid.is_empty() {
        return Ok(());
    }
    invalid.sort();
    Err(ConfigError::InvalidKeys(invalid))
}

/// Split `<label>:<address>` bind entries into (network, component) addresses.
///
/// An entry whose text contains `network` or `component` contributes the text
/// after its first colon. The first match per label wins; unrecognised labels
/// are ignored.
pub fn parse_bind_entries<I, S>(entries: I) -> (Option<String>, Option<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut network = None;
    let mut component = None;

    for entry in entries {
        let entry = entry.as_ref();
        let address = match entry.find(':') {
            Some(index) => &entry[index + 1..],
            None => entry,
        };
        if network.is_none() && entry.contains("network") {
            network = Some(address.to_string());
        }
        if component.is_none() && entry.contains("component") {
            component = Some(address.to_string());
        }
    }

    (network, component)
}

/// Build a snapshot from a parsed config file.
///
/// `permissions` is compiled against `policy_dir`; every other field is
/// passed through without checking its value.
pub fn extract(table: &Table, policy_dir: &Path) -> Result<NodeConfig, ConfigError> {
    validate_keys(table)?;

    let (bind_network, bind_component) = match string_list(table, "bind")? {
        Some(entries) => parse_bind_entries(entries),
        None => (None, None),
    };

    let permissions = match string_map(table, "permissions")? {
        Some(files) => compile_permissions(&files, policy_dir),
        None => None,
    };

    Ok(NodeConfig {
        bind_network,
        bind_component,
        endpoint: string(table, "endpoint")?,
        peering: string(table, "peering")?,
        seeds: string_list(table, "seeds")?,
        peers: string_list(table, "peers")?,
        network_public_key: string(table, "network_public_key")?.map(String::into_bytes),
        network_private_key: string(table, "network_private_key")?.map(String::into_bytes),
        scheduler: string(table, "scheduler")?,
        permissions,
        roles: string_map(table, "roles")?,
        opentsdb_url: None,
        opentsdb_db: None,
    })
}

fn invalid(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn string(table: &Table, key: &str) -> Result<Option<String>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(key, "a string")),
    }
}

fn string_list(table: &Table, key: &str) -> Result<Option<Vec<String>>, ConfigError> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };
    let Value::Array(items) = value else {
        return Err(invalid(key, "an array of strings"));
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(invalid(key, "an array of strings")),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn string_map(table: &Table, key: &str) -> Result<Option<BTreeMap<String, String>>, ConfigError> {
    let Some(value) = table.get(key) else {
        return Ok(None);
    };
    let Value::Table(entries) = value else {
        return Err(invalid(key, "a table of strings"));
    };
    entries
        .iter()
        .map(|(name, item)| match item {
            Value::String(s) => Ok((name.clone(), s.clone())),
            _ => Err(invalid(key, "a table of strings")),
        })
        .collect::<Result<BTreeMap<_, _>, _>>()
        .map(Some)
}
