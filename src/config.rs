//! Configuration System
//!
//! Resolves a node's effective configuration from layered sources. Each source
//! produces a partially-populated [`NodeConfig`] snapshot; snapshots are merged
//! field by field with the highest-priority specified value winning.
//!
//! File schema (every top-level key is optional, no others are allowed):
//!
//! ```toml
//! bind = ["network:tcp://127.0.0.1:8800", "component:tcp://127.0.0.1:4004"]
//! endpoint = "tcp://203.0.113.5:8800"
//! peering = "static"
//! seeds = ["tcp://seed-1:8800"]
//! peers = []
//! network_public_key = "..."
//! network_private_key = "..."
//! scheduler = "serial"
//!
//! [permissions]
//! network = "network.rules"
//!
//! [roles]
//! network = "trust"
//! ```

mod extract;
mod facade;
mod merge;
mod paths;
mod snapshot;
pub mod sources;

pub use extract::{extract, parse_bind_entries, validate_keys, RECOGNIZED_KEYS};
pub use facade::ConfigLoader;
pub use merge::merge_configs;
pub use paths::{PathConfig, CONFIG_FILE_NAME, HOME_ENV};
pub use snapshot::{
    NodeConfig, NodeConfigBuilder, Peering, Scheduler, DEFAULT_BIND_COMPONENT,
    DEFAULT_BIND_NETWORK,
};
pub use sources::environment::{environment_overrides, environment_overrides_from, ENV_PREFIX};
pub use sources::file::load_toml_config;
