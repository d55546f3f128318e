//! Integration tests for loading node config files

use super::test_utils::{with_node_home_env, NodeHome};
use nodeconf::config::{
    extract, merge_configs, ConfigLoader, NodeConfig, PathConfig, DEFAULT_BIND_COMPONENT,
    DEFAULT_BIND_NETWORK,
};
use nodeconf::error::ConfigError;
use nodeconf::policy::Entry;

#[test]
fn test_missing_config_file_equals_unset_snapshot() {
    let home = NodeHome::new();
    let loader = home.loader();

    let loaded = loader.load_toml_config(&home.paths.config_file()).unwrap();
    assert_eq!(loaded, NodeConfig::default());

    let merged = merge_configs(&[loaded, ConfigLoader::load_default_config()]);
    assert_eq!(merged.bind_network(), Some(DEFAULT_BIND_NETWORK));
    assert_eq!(merged.bind_component(), Some(DEFAULT_BIND_COMPONENT));
}

#[test]
fn test_full_config_file() {
    let home = NodeHome::new();
    home.write_policy("network.rules", "PERMIT_KEY 02a1b2\nDENY_KEY *\n");
    let path = home.write_config(
        r#"
bind = [
  "network:tcp://eth0:8800",
  "component:tcp://eth0:4004",
]
endpoint = "tcp://203.0.113.5:8800"
peering = "dynamic"
seeds = ["tcp://seed-1.example:8800"]
peers = ["tcp://peer-1.example:8800", "tcp://peer-2.example:8800"]
network_public_key = "wFMwoOt>yFqI/ek.G[tfMMILHWw#vXB[Sv}>l>i)"
network_private_key = "r&oJ5aQDj4+V]p2:Lz70Eu0x#m%IwzBdP(}&hWM*"
scheduler = "parallel"

[permissions]
network = "network.rules"
transactor = "missing.rules"

[roles]
network = "trust"
"#,
    );

    let config = home.loader().load_toml_config(&path).unwrap();
    assert_eq!(config.bind_network(), Some("tcp://eth0:8800"));
    assert_eq!(config.bind_component(), Some("tcp://eth0:4004"));
    assert_eq!(config.endpoint(), Some("tcp://203.0.113.5:8800"));
    assert_eq!(config.peering(), Some("dynamic"));
    assert_eq!(config.peers().map(|p| p.len()), Some(2));
    assert_eq!(
        config.network_private_key(),
        Some("r&oJ5aQDj4+V]p2:Lz70Eu0x#m%IwzBdP(}&hWM*".as_bytes())
    );
    assert_eq!(config.scheduler(), Some("parallel"));
    assert_eq!(config.roles().unwrap().get("network").map(String::as_str), Some("trust"));

    let permissions = config.permissions().unwrap();
    assert_eq!(permissions.len(), 1);
    assert_eq!(permissions["network"].name, "network.rules");
    assert_eq!(
        permissions["network"].entries,
        vec![Entry::permit("02a1b2"), Entry::deny("*")]
    );
    assert_eq!(config.opentsdb_url(), None);
}

#[test]
fn test_unknown_keys_fail_whole_load() {
    let home = NodeHome::new();
    let path = home.write_config(
        "endpoint = \"tcp://x:1\"\nopentsdb_db = \"metrics\"\nbinds = []\n[logging]\nlevel = \"debug\"\n",
    );

    let err = home.loader().load_toml_config(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid keys in validator config: binds, logging, opentsdb_db"
    );
}

#[test]
fn test_malformed_file_is_parse_error() {
    let home = NodeHome::new();
    let path = home.write_config("endpoint = \n");
    let err = home.loader().load_toml_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_source_table_round_trip_with_permissions() {
    let home = NodeHome::new();
    home.write_policy("net.rules", "PERMIT_KEY abc\n");
    let path = home.write_config(
        r#"
bind = ["network:tcp://127.0.0.1:9000"]
seeds = []
network_public_key = "key-text"

[permissions]
network = "net.rules"
"#,
    );

    let loaded = home.loader().load_toml_config(&path).unwrap();
    let reextracted = extract(&loaded.to_source_table(), &home.paths.policy_dir).unwrap();
    assert_eq!(reextracted, loaded);
}

#[test]
fn test_diagnostic_dump_parses_back() {
    let home = NodeHome::new();
    let path = home.write_config("endpoint = \"tcp://e:1\"\nseeds = [\"tcp://s:1\"]\n");
    let loaded = home.loader().load_toml_config(&path).unwrap();

    let lines = loaded.to_lines().unwrap();
    assert_eq!(lines[0], "endpoint = \"tcp://e:1\"");
    let reparsed: toml::Table = loaded.to_toml_string().unwrap().parse().unwrap();
    assert_eq!(reparsed["seeds"][0].as_str(), Some("tcp://s:1"));
}

#[test]
fn test_node_home_env_selects_paths() {
    let home = NodeHome::new();
    with_node_home_env(home.home(), || {
        let paths = PathConfig::load();
        assert_eq!(paths.config_dir, home.home().join("etc"));
        assert_eq!(paths.policy_dir, home.home().join("policy"));
    });
}

#[test]
fn test_resolve_uses_default_config_location() {
    let home = NodeHome::new();
    home.write_config("scheduler = \"parallel\"\n");

    let resolved = home
        .loader()
        .resolve_layers(&NodeConfig::default(), &NodeConfig::default(), None)
        .unwrap();
    assert_eq!(resolved.scheduler(), Some("parallel"));
    assert_eq!(resolved.peering(), Some("static"));
}
