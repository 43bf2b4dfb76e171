//! Configuration schema for bookdb.toml.

use crate::types::MultiCallPolicy;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookdbConfig {
    /// Path to a JSON or YAML record file. Empty means the built-in dataset.
    pub catalog_path: String,

    /// What to do when the model returns several tool calls.
    pub multi_call_policy: MultiCallPolicy,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for BookdbConfig {
    fn default() -> Self {
        Self {
            catalog_path: String::new(),
            multi_call_policy: MultiCallPolicy::First,
            log_level: "info".into(),
        }
    }
}

impl BookdbConfig {
    /// Resolve a path that may contain `~` to an absolute path.
    pub fn resolve_path(&self, path: &str) -> String {
        shellexpand::tilde(path).into_owned()
    }

    /// Resolved catalog path, or `None` for the built-in dataset.
    pub fn resolved_catalog_path(&self) -> Option<String> {
        if self.catalog_path.trim().is_empty() {
            None
        } else {
            Some(self.resolve_path(&self.catalog_path))
        }
    }
}
