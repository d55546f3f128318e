//! nodeconf: ledger node configuration resolution
//!
//! Resolves a node's effective configuration from defaults, a TOML file,
//! environment variables and command-line overrides, and compiles the
//! permission policies the configuration references.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod policy;
