//! Path configuration: where the node's config file and policy rules live.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a self-contained node home directory.
pub const HOME_ENV: &str = "NODECONF_HOME";

/// Name of the node config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "validator.toml";

const APPLICATION: &str = "nodeconf";

/// Resolved configuration and policy directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    pub config_dir: PathBuf,
    pub policy_dir: PathBuf,
}

impl PathConfig {
    /// Resolve from the process environment.
    ///
    /// `$NODECONF_HOME/etc` and `$NODECONF_HOME/policy` when the variable is
    /// set, the platform config directory otherwise, `/etc/nodeconf` as a
    /// last resort.
    pub fn load() -> Self {
        match std::env::var_os(HOME_ENV) {
            Some(home) if !home.is_empty() => Self::under_home(Path::new(&home)),
            _ => Self::platform_default(),
        }
    }

    /// Layout rooted at a node home directory.
    pub fn under_home(home: &Path) -> Self {
        Self {
            config_dir: home.join("etc"),
            policy_dir: home.join("policy"),
        }
    }

    fn platform_default() -> Self {
        let config_dir = ProjectDirs::from("", "", APPLICATION)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("/etc").join(APPLICATION));
        let policy_dir = config_dir.join("policy");
        Self {
            config_dir,
            policy_dir,
        }
    }

    /// Default location of the node config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}
