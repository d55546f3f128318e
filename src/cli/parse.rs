//! CLI parse: clap types for nodeconf. No behavior beyond turning flags into a snapshot.

use crate::config::{parse_bind_entries, NodeConfig, Peering, Scheduler};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// nodeconf - resolve ledger node configuration and compile permission policies
#[derive(Debug, Parser)]
#[command(name = "nodeconf")]
#[command(about = "Resolve ledger node configuration and compile permission policies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Node config file (default: <config dir>/validator.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory holding policy rule files (default: <config dir>/policy)
    #[arg(long)]
    pub policy_dir: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Highest-priority configuration layer.
#[derive(Debug, Default, Args)]
pub struct OverrideArgs {
    /// Bind address as LABEL:ADDRESS with LABEL network or component (repeatable)
    #[arg(long = "bind", short = 'B', value_name = "LABEL:ADDRESS")]
    pub bind: Vec<String>,

    /// Advertised public endpoint
    #[arg(long, short = 'E')]
    pub endpoint: Option<String>,

    /// Peering mode
    #[arg(long, value_enum)]
    pub peering: Option<Peering>,

    /// Comma-separated seed addresses
    #[arg(long, short = 's', value_delimiter = ',')]
    pub seeds: Option<Vec<String>>,

    /// Comma-separated peer addresses
    #[arg(long, short = 'P', value_delimiter = ',')]
    pub peers: Option<Vec<String>>,

    /// Transaction scheduler
    #[arg(long, value_enum)]
    pub scheduler: Option<Scheduler>,

    /// Metrics endpoint URL
    #[arg(long)]
    pub opentsdb_url: Option<String>,

    /// Metrics database name
    #[arg(long)]
    pub opentsdb_db: Option<String>,
}

impl OverrideArgs {
    /// Snapshot holding only the flags that were given.
    pub fn to_config(&self) -> NodeConfig {
        let (bind_network, bind_component) = parse_bind_entries(&self.bind);
        let mut builder = NodeConfig::builder();

        if let Some(address) = bind_network {
            builder = builder.bind_network(address);
        }
        if let Some(address) = bind_component {
            builder = builder.bind_component(address);
        }
        if let Some(endpoint) = &self.endpoint {
            builder = builder.endpoint(endpoint.as_str());
        }
        if let Some(peering) = self.peering {
            builder = builder.peering(peering.as_str());
        }
        if let Some(seeds) = &self.seeds {
            builder = builder.seeds(seeds.iter().cloned());
        }
        if let Some(peers) = &self.peers {
            builder = builder.peers(peers.iter().cloned());
        }
        if let Some(scheduler) = self.scheduler {
            builder = builder.scheduler(scheduler.as_str());
        }
        if let Some(url) = &self.opentsdb_url {
            builder = builder.opentsdb_url(url.as_str());
        }
        if let Some(db) = &self.opentsdb_db {
            builder = builder.opentsdb_db(db.as_str());
        }

        builder.build()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the effective configuration
    Show {
        /// Output format (toml, json, or debug)
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Check that peering and scheduler values are recognised
    Check,
    /// List compiled permission policies per role
    Policies {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
