//! Permission Policy Compiler
//!
//! Translates role -> policy-file associations into ordered rule sets. Each rule
//! file is newline-delimited text where every meaningful line reads
//! `<ACTION> <key-identifier>` with ACTION one of `PERMIT_KEY` or `DENY_KEY`.
//!
//! Entries keep file line order. Whether the authorization engine evaluates
//! them first-match-wins or last-match-wins is its own contract; nothing here
//! reorders or deduplicates rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Rule action carried by a policy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "PERMIT_KEY")]
    PermitKey,
    #[serde(rename = "DENY_KEY")]
    DenyKey,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::PermitKey => "PERMIT_KEY",
            EntryType::DenyKey => "DENY_KEY",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERMIT_KEY" => Ok(EntryType::PermitKey),
            "DENY_KEY" => Ok(EntryType::DenyKey),
            _ => Err(()),
        }
    }
}

/// One permit/deny rule referencing a single key identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub key: String,
}

impl Entry {
    pub fn permit(key: impl Into<String>) -> Self {
        Self {
            entry_type: EntryType::PermitKey,
            key: key.into(),
        }
    }

    pub fn deny(key: impl Into<String>) -> Self {
        Self {
            entry_type: EntryType::DenyKey,
            key: key.into(),
        }
    }
}

/// Compiled permission policy: the source filename plus its ordered entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Policy {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Policy {
    /// Compile rule text into a policy named `name`.
    ///
    /// Blank lines and lines led by anything other than a known action are
    /// skipped silently.
    pub fn parse(name: &str, text: &str) -> Self {
        let mut entries = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let mut tokens = line.split_whitespace();
            let Some(action) = tokens.next() else {
                continue;
            };
            let Ok(entry_type) = action.parse::<EntryType>() else {
                continue;
            };
            match tokens.next() {
                Some(key) => entries.push(Entry {
                    entry_type,
                    key: key.to_string(),
                }),
                None => warn!(
                    policy = name,
                    line = index + 1,
                    "{} rule has no key identifier; skipping",
                    entry_type
                ),
            }
        }

        Self {
            name: name.to_string(),
            entries,
        }
    }
}

/// Compile every role's policy file found under `policy_dir`.
///
/// Roles whose file is missing (or cannot be read) are left out with a
/// warning. When no role resolves at all the result is `None`, keeping
/// "nothing resolvable" apart from an explicit empty mapping.
pub fn compile_permissions(
    permissions: &BTreeMap<String, String>,
    policy_dir: &Path,
) -> Option<BTreeMap<String, Policy>> {
    let mut roles = BTreeMap::new();

    for (role_name, policy_name) in permissions {
        let policy_path = policy_dir.join(policy_name);
        if !policy_path.exists() {
            warn!(
                "{} does not exist. {} will not be set.",
                policy_path.display(),
                role_name
            );
            continue;
        }

        let text = match std::fs::read_to_string(&policy_path) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Unable to read policy {}: {}. {} will not be set.",
                    policy_path.display(),
                    e,
                    role_name
                );
                continue;
            }
        };

        let policy = Policy::parse(policy_name, &text);
        debug!(
            role = %role_name,
            policy = %policy_name,
            entries = policy.entries.len(),
            "Compiled permission policy"
        );
        roles.insert(role_name.clone(), policy);
    }

    if roles.is_empty() {
        None
    } else {
        Some(roles)
    }
}
