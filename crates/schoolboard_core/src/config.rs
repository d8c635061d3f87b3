//! Store configuration.
//!
//! # Responsibility
//! - Name the storage keys of the three persisted collections.
//! - Carry defaults used by the creation-form layer.

pub const DEFAULT_AUTHOR: &str = "Administrator";

/// Storage keys of the persisted collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub announcements: String,
    pub substitutions: String,
    pub notifications: String,
}

impl StorageKeys {
    /// Keys namespaced as `{prefix}:{collection}`.
    ///
    /// Lets several stores (e.g. one per class) share a single backend.
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Self::default();
        }
        Self {
            announcements: format!("{prefix}:announcements"),
            substitutions: format!("{prefix}:substitutions"),
            notifications: format!("{prefix}:notifications"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            announcements: "announcements".to_string(),
            substitutions: "substitutions".to_string(),
            notifications: "notifications".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub keys: StorageKeys,
    /// Author recorded on announcements created through the form layer.
    pub default_author: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            default_author: DEFAULT_AUTHOR.to_string(),
        }
    }
}
