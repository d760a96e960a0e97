use crate::DEFAULT_DATABASE_FILENAME;

use roster_core::ConflictPolicy;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// File name relative to the config directory
    pub path: String,
    /// Keep everything in memory; `path` is ignored
    pub in_memory: bool,
    pub conflict_policy: ConflictPolicy,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            in_memory: false,
            conflict_policy: ConflictPolicy::default(),
        }
    }
}
