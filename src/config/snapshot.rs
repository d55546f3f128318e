//! Configuration snapshot value object.

use crate::error::ConfigError;
use crate::policy::Policy;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Network bind address used by a bare node.
pub const DEFAULT_BIND_NETWORK: &str = "tcp://127.0.0.1:8800";

/// Component bind address used by a bare node.
pub const DEFAULT_BIND_COMPONENT: &str = "tcp://127.0.0.1:4004";

/// Peer discovery mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Peering {
    Static,
    Dynamic,
}

impl Peering {
    pub fn as_str(&self) -> &'static str {
        match self {
            Peering::Static => "static",
            Peering::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for Peering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Peering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Peering::Static),
            "dynamic" => Ok(Peering::Dynamic),
            other => Err(ConfigError::InvalidChoice {
                field: "peering",
                value: other.to_string(),
            }),
        }
    }
}

/// Transaction scheduler selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scheduler {
    Serial,
    Parallel,
}

impl Scheduler {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheduler::Serial => "serial",
            Scheduler::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheduler {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "serial" => Ok(Scheduler::Serial),
            "parallel" => Ok(Scheduler::Parallel),
            other => Err(ConfigError::InvalidChoice {
                field: "scheduler",
                value: other.to_string(),
            }),
        }
    }
}

/// One fully- or partially-populated node configuration.
///
/// Every field is optional; `None` means "not specified by this source".
/// For `permissions`, `Some` of an empty map is a meaningful value that
/// clears permissions when merged over lower-priority snapshots.
///
/// Snapshots are immutable once built. Use [`NodeConfig::builder`] to
/// construct one field by field.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bind_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bind_component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) peering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seeds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) peers: Option<Vec<String>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_raw_key"
    )]
    pub(crate) network_public_key: Option<Vec<u8>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_raw_key"
    )]
    pub(crate) network_private_key: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scheduler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) permissions: Option<BTreeMap<String, Policy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) roles: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) opentsdb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) opentsdb_db: Option<String>,
}

/// Keys are rendered as the text they were decoded from, not re-encoded.
fn serialize_raw_key<S>(key: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match key {
        Some(bytes) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
        None => serializer.serialize_none(),
    }
}

/// Keys show as their decoded text rather than byte arrays.
impl fmt::Debug for NodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn raw(key: &Option<Vec<u8>>) -> Option<std::borrow::Cow<'_, str>> {
            key.as_deref().map(String::from_utf8_lossy)
        }

        f.debug_struct("NodeConfig")
            .field("bind_network", &self.bind_network)
            .field("bind_component", &self.bind_component)
            .field("endpoint", &self.endpoint)
            .field("peering", &self.peering)
            .field("seeds", &self.seeds)
            .field("peers", &self.peers)
            .field("network_public_key", &raw(&self.network_public_key))
            .field("network_private_key", &raw(&self.network_private_key))
            .field("scheduler", &self.scheduler)
            .field("permissions", &self.permissions)
            .field("roles", &self.roles)
            .field("opentsdb_url", &self.opentsdb_url)
            .field("opentsdb_db", &self.opentsdb_db)
            .finish()
    }
}

impl NodeConfig {
    /// Snapshot with concrete operational values for a bare node.
    pub fn default_node() -> Self {
        Self::builder()
            .bind_network(DEFAULT_BIND_NETWORK)
            .bind_component(DEFAULT_BIND_COMPONENT)
            .peering(Peering::Static.as_str())
            .scheduler(Scheduler::Serial.as_str())
            .build()
    }

    pub fn builder() -> NodeConfigBuilder {
        NodeConfigBuilder::default()
    }

    pub fn bind_network(&self) -> Option<&str> {
        self.bind_network.as_deref()
    }

    pub fn bind_component(&self) -> Option<&str> {
        self.bind_component.as_deref()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn peering(&self) -> Option<&str> {
        self.peering.as_deref()
    }

    pub fn seeds(&self) -> Option<&[String]> {
        self.seeds.as_deref()
    }

    pub fn peers(&self) -> Option<&[String]> {
        self.peers.as_deref()
    }

    pub fn network_public_key(&self) -> Option<&[u8]> {
        self.network_public_key.as_deref()
    }

    pub fn network_private_key(&self) -> Option<&[u8]> {
        self.network_private_key.as_deref()
    }

    pub fn scheduler(&self) -> Option<&str> {
        self.scheduler.as_deref()
    }

    pub fn permissions(&self) -> Option<&BTreeMap<String, Policy>> {
        self.permissions.as_ref()
    }

    pub fn roles(&self) -> Option<&BTreeMap<String, String>> {
        self.roles.as_ref()
    }

    pub fn opentsdb_url(&self) -> Option<&str> {
        self.opentsdb_url.as_deref()
    }

    pub fn opentsdb_db(&self) -> Option<&str> {
        self.opentsdb_db.as_deref()
    }

    /// Typed peering mode, for consumers that need a recognised value.
    pub fn peering_mode(&self) -> Result<Option<Peering>, ConfigError> {
        self.peering.as_deref().map(str::parse).transpose()
    }

    /// Typed scheduler selection, for consumers that need a recognised value.
    pub fn scheduler_kind(&self) -> Result<Option<Scheduler>, ConfigError> {
        self.scheduler.as_deref().map(str::parse).transpose()
    }

    /// True when no field is set.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// Render every set field as TOML.
    ///
    /// Plain values come first in snapshot field order; the table-valued
    /// fields (`permissions`, `roles`) follow as TOML sections.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// [`Self::to_toml_string`] split into trimmed lines.
    pub fn to_lines(&self) -> Result<Vec<String>, ConfigError> {
        Ok(self
            .to_toml_string()?
            .trim()
            .lines()
            .map(str::to_string)
            .collect())
    }

    /// Render the snapshot in the schema of a node config file.
    ///
    /// Compiled permissions are written back as role -> policy filename.
    /// The legacy metrics fields have no file representation and are dropped.
    pub fn to_source_table(&self) -> toml::Table {
        use toml::Value;

        fn strings(items: &[String]) -> Value {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }

        let mut table = toml::Table::new();

        let mut bind = Vec::new();
        if let Some(address) = &self.bind_network {
            bind.push(format!("network:{}", address));
        }
        if let Some(address) = &self.bind_component {
            bind.push(format!("component:{}", address));
        }
        if !bind.is_empty() {
            table.insert("bind".to_string(), strings(&bind));
        }
        if let Some(endpoint) = &self.endpoint {
            table.insert("endpoint".to_string(), Value::String(endpoint.clone()));
        }
        if let Some(peering) = &self.peering {
            table.insert("peering".to_string(), Value::String(peering.clone()));
        }
        if let Some(seeds) = &self.seeds {
            table.insert("seeds".to_string(), strings(seeds));
        }
        if let Some(peers) = &self.peers {
            table.insert("peers".to_string(), strings(peers));
        }
        if let Some(key) = &self.network_public_key {
            table.insert(
                "network_public_key".to_string(),
                Value::String(String::from_utf8_lossy(key).into_owned()),
            );
        }
        if let Some(key) = &self.network_private_key {
            table.insert(
                "network_private_key".to_string(),
                Value::String(String::from_utf8_lossy(key).into_owned()),
            );
        }
        if let Some(scheduler) = &self.scheduler {
            table.insert("scheduler".to_string(), Value::String(scheduler.clone()));
        }
        if let Some(permissions) = &self.permissions {
            let files = permissions
                .iter()
                .map(|(role, policy)| (role.clone(), Value::String(policy.name.clone())))
                .collect();
            table.insert("permissions".to_string(), Value::Table(files));
        }
        if let Some(roles) = &self.roles {
            let roles = roles
                .iter()
                .map(|(role, value)| (role.clone(), Value::String(value.clone())))
                .collect();
            table.insert("roles".to_string(), Value::Table(roles));
        }

        table
    }
}

/// Builder for [`NodeConfig`]; every field starts unset.
#[derive(Debug, Clone, Default)]
pub struct NodeConfigBuilder {
    config: NodeConfig,
}

impl NodeConfigBuilder {
    pub fn bind_network(mut self, address: impl Into<String>) -> Self {
        self.config.bind_network = Some(address.into());
        self
    }

    pub fn bind_component(mut self, address: impl Into<String>) -> Self {
        self.config.bind_component = Some(address.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    pub fn peering(mut self, peering: impl Into<String>) -> Self {
        self.config.peering = Some(peering.into());
        self
    }

    pub fn seeds<I, S>(mut self, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.seeds = Some(seeds.into_iter().map(Into::into).collect());
        self
    }

    pub fn peers<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.peers = Some(peers.into_iter().map(Into::into).collect());
        self
    }

    pub fn network_public_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.config.network_public_key = Some(key.into());
        self
    }

    pub fn network_private_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.config.network_private_key = Some(key.into());
        self
    }

    pub fn scheduler(mut self, scheduler: impl Into<String>) -> Self {
        self.config.scheduler = Some(scheduler.into());
        self
    }

    pub fn permissions(mut self, permissions: BTreeMap<String, Policy>) -> Self {
        self.config.permissions = Some(permissions);
        self
    }

    pub fn roles(mut self, roles: BTreeMap<String, String>) -> Self {
        self.config.roles = Some(roles);
        self
    }

    pub fn opentsdb_url(mut self, url: impl Into<String>) -> Self {
        self.config.opentsdb_url = Some(url.into());
        self
    }

    pub fn opentsdb_db(mut self, db: impl Into<String>) -> Self {
        self.config.opentsdb_db = Some(db.into());
        self
    }

    pub fn build(self) -> NodeConfig {
        self.config
    }
}
