//! Change-auditing configuration.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

fn default_primary_key_field() -> String {
    "id".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Write derived audit rows. When off, diffs are still computed but
    /// nothing is stored.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Field excluded from diffs as the record's identifier.
    #[serde(default = "default_primary_key_field")]
    pub primary_key_field: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            primary_key_field: default_primary_key_field(),
        }
    }
}
