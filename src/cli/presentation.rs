//! CLI presentation: text and json formatters for snapshots and policies.

use crate::config::{NodeConfig, Peering, Scheduler};
use crate::error::ConfigError;
use serde_json::json;

pub fn format_config_toml(config: &NodeConfig) -> Result<String, ConfigError> {
    config.to_toml_string()
}

pub fn format_config_json(config: &NodeConfig) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))
}

pub fn format_config_debug(config: &NodeConfig) -> String {
    format!("{:#?}", config)
}

pub fn format_check_summary(
    config: &NodeConfig,
    peering: Option<Peering>,
    scheduler: Option<Scheduler>,
) -> String {
    let unset = "(unset)";
    let mut output = String::from("Configuration OK\n");
    output.push_str(&format!(
        "  bind network:   {}\n",
        config.bind_network().unwrap_or(unset)
    ));
    output.push_str(&format!(
        "  bind component: {}\n",
        config.bind_component().unwrap_or(unset)
    ));
    output.push_str(&format!("  endpoint:       {}\n", config.endpoint().unwrap_or(unset)));
    output.push_str(&format!(
        "  peering:        {}\n",
        peering.map(|p| p.as_str()).unwrap_or(unset)
    ));
    output.push_str(&format!(
        "  scheduler:      {}\n",
        scheduler.map(|s| s.as_str()).unwrap_or(unset)
    ));
    output.push_str(&format!(
        "  seeds:          {}\n",
        config.seeds().map(|s| s.len()).unwrap_or(0)
    ));
    output.push_str(&format!(
        "  peers:          {}\n",
        config.peers().map(|p| p.len()).unwrap_or(0)
    ));
    output.push_str(&format!(
        "  policies:       {}\n",
        config.permissions().map(|p| p.len()).unwrap_or(0)
    ));
    output
}

pub fn format_policies_text(config: &NodeConfig) -> String {
    let Some(permissions) = config.permissions() else {
        return "No permission policies configured.".to_string();
    };
    if permissions.is_empty() {
        return "Permission policies explicitly cleared.".to_string();
    }

    let mut output = String::new();
    for (role, policy) in permissions {
        output.push_str(&format!("{} ({})\n", role, policy.name));
        for entry in &policy.entries {
            output.push_str(&format!("  {:<10} {}\n", entry.entry_type.as_str(), entry.key));
        }
    }
    output.push_str(&format!("\nTotal: {} role(s)\n", permissions.len()));
    output
}

pub fn format_policies_json(config: &NodeConfig) -> Result<String, ConfigError> {
    let out = json!({ "permissions": config.permissions() });
    serde_json::to_string_pretty(&out).map_err(|e| ConfigError::Serialize(e.to_string()))
}
