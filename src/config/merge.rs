//! Merge rules: per-field precedence across ordered snapshots.
//!
//! Snapshots are listed highest priority first. The merge folds from the
//! lowest priority upward, and each step takes only the fields the higher
//! snapshot actually specifies. Collections are replaced wholesale, never
//! concatenated. An explicitly empty `permissions` map is a value like any
//! other, so it overrides (clears) lower-priority permissions.

use super::snapshot::NodeConfig;

impl NodeConfig {
    /// Layer `higher` over `self`, returning a new snapshot.
    pub fn overlay(&self, higher: &NodeConfig) -> NodeConfig {
        fn pick<T: Clone>(higher: &Option<T>, lower: &Option<T>) -> Option<T> {
            higher.as_ref().or(lower.as_ref()).cloned()
        }

        NodeConfig {
            bind_network: pick(&higher.bind_network, &self.bind_network),
            bind_component: pick(&higher.bind_component, &self.bind_component),
            endpoint: pick(&higher.endpoint, &self.endpoint),
            peering: pick(&higher.peering, &self.peering),
            seeds: pick(&higher.seeds, &self.seeds),
            peers: pick(&higher.peers, &self.peers),
            network_public_key: pick(&higher.network_public_key, &self.network_public_key),
            network_private_key: pick(&higher.network_private_key, &self.network_private_key),
            scheduler: pick(&higher.scheduler, &self.scheduler),
            permissions: pick(&higher.permissions, &self.permissions),
            roles: pick(&higher.roles, &self.roles),
            opentsdb_url: pick(&higher.opentsdb_url, &self.opentsdb_url),
            opentsdb_db: pick(&higher.opentsdb_db, &self.opentsdb_db),
        }
    }
}

/// Merge snapshots, index 0 taking priority over everything after it.
///
/// An empty slice yields an all-unset snapshot.
pub fn merge_configs(configs: &[NodeConfig]) -> NodeConfig {
    configs
        .iter()
        .rev()
        .fold(NodeConfig::default(), |merged, config| merged.overlay(config))
}
