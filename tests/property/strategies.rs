//! Shared proptest strategies

use nodeconf::config::NodeConfig;
use nodeconf::policy::{Entry, Policy};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;

/// Addresses contain no label words, so bind entries cannot be mistaken for one another.
pub fn address() -> impl Strategy<Value = String> {
    "tcp://[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}:[0-9]{1,5}"
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9+/=]{0,16}"
}

fn policy() -> impl Strategy<Value = Policy> {
    (
        "[a-z]{1,8}\\.rules",
        vec(
            ("[a-z0-9*]{1,8}", any::<bool>()).prop_map(|(key, permit)| {
                if permit {
                    Entry::permit(key)
                } else {
                    Entry::deny(key)
                }
            }),
            0..4,
        ),
    )
        .prop_map(|(name, entries)| Policy { name, entries })
}

/// Snapshot with every field independently set or unset.
pub fn node_config() -> impl Strategy<Value = NodeConfig> {
    let network = (
        option::of(address()),
        option::of(address()),
        option::of(address()),
        option::of(prop_oneof!["static", "dynamic"].prop_map(String::from)),
        option::of(vec(address(), 0..3)),
        option::of(vec(address(), 0..3)),
    );
    let rest = (
        option::of(text()),
        option::of(text()),
        option::of(prop_oneof!["serial", "parallel"].prop_map(String::from)),
        option::of(btree_map("[a-z]{1,6}", policy(), 0..3)),
        option::of(btree_map("[a-z]{1,6}", "[a-z]{1,6}", 0..3)),
        option::of("http://[a-z]{1,8}:[0-9]{4}"),
        option::of("[a-z_]{1,8}"),
    );

    (network, rest).prop_map(
        |(
            (bind_network, bind_component, endpoint, peering, seeds, peers),
            (public_key, private_key, scheduler, permissions, roles, opentsdb_url, opentsdb_db),
        )| {
            let mut builder = NodeConfig::builder();
            if let Some(v) = bind_network {
                builder = builder.bind_network(v);
            }
            if let Some(v) = bind_component {
                builder = builder.bind_component(v);
            }
            if let Some(v) = endpoint {
                builder = builder.endpoint(v);
            }
            if let Some(v) = peering {
                builder = builder.peering(v);
            }
            if let Some(v) = seeds {
                builder = builder.seeds(v);
            }
            if let Some(v) = peers {
                builder = builder.peers(v);
            }
            if let Some(v) = public_key {
                builder = builder.network_public_key(v);
            }
            if let Some(v) = private_key {
                builder = builder.network_private_key(v);
            }
            if let Some(v) = scheduler {
                builder = builder.scheduler(v);
            }
            if let Some(v) = permissions {
                builder = builder.permissions(v);
            }
            if let Some(v) = roles {
                builder = builder.roles(v);
            }
            if let Some(v) = opentsdb_url {
                builder = builder.opentsdb_url(v);
            }
            if let Some(v) = opentsdb_db {
                builder = builder.opentsdb_db(v);
            }
            builder.build()
        },
    )
}

/// Snapshot restricted to what a config file can express without a policy directory.
pub fn file_representable_config() -> impl Strategy<Value = NodeConfig> {
    node_config().prop_map(|config| {
        let mut table = config.to_source_table();
        table.remove("permissions");
        nodeconf::config::extract(&table, std::path::Path::new("/nonexistent")).unwrap()
    })
}
