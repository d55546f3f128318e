//! Integration tests for layered precedence across real sources

use super::test_utils::NodeHome;
use nodeconf::config::{environment_overrides_from, merge_configs, NodeConfig};
use std::collections::BTreeMap;

#[test]
fn test_unset_high_priority_keeps_lower_empty_permissions() {
    let a = NodeConfig::builder().endpoint("tcp://a:1").build();
    let b = NodeConfig::builder().permissions(BTreeMap::new()).build();

    let merged = merge_configs(&[a, b]);
    assert_eq!(merged.permissions(), Some(&BTreeMap::new()));
}

#[test]
fn test_cli_over_environment_over_file_over_defaults() {
    let home = NodeHome::new();
    home.write_config(
        r#"
bind = ["component:tcp://file:4004"]
endpoint = "tcp://file:8800"
seeds = ["tcp://file-seed:8800"]
peering = "dynamic"
"#,
    );

    let environment = environment_overrides_from([
        ("NODECONF_ENDPOINT", "tcp://env:8800"),
        ("NODECONF_SEEDS", "tcp://env-seed-1:8800,tcp://env-seed-2:8800"),
    ])
    .unwrap();
    let cli = NodeConfig::builder().endpoint("tcp://cli:8800").build();

    let resolved = home.loader().resolve_layers(&cli, &environment, None).unwrap();
    assert_eq!(resolved.endpoint(), Some("tcp://cli:8800"));
    assert_eq!(
        resolved.seeds(),
        Some(&["tcp://env-seed-1:8800".to_string(), "tcp://env-seed-2:8800".to_string()][..])
    );
    assert_eq!(resolved.peering(), Some("dynamic"));
    assert_eq!(resolved.bind_component(), Some("tcp://file:4004"));
    assert_eq!(resolved.bind_network(), Some("tcp://127.0.0.1:8800"));
    assert_eq!(resolved.scheduler(), Some("serial"));
}

#[test]
fn test_metrics_fields_only_come_from_overrides() {
    let home = NodeHome::new();
    let environment =
        environment_overrides_from([("NODECONF_OPENTSDB_URL", "http://metrics:8086")]).unwrap();
    let cli = NodeConfig::builder().opentsdb_db("node_metrics").build();

    let resolved = home.loader().resolve_layers(&cli, &environment, None).unwrap();
    assert_eq!(resolved.opentsdb_url(), Some("http://metrics:8086"));
    assert_eq!(resolved.opentsdb_db(), Some("node_metrics"));
}
