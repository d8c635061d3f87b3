//! In-process key-value backend.
//!
//! Used by tests and by hosts without durable storage. An optional byte quota
//! and a disabled mode reproduce the failure modes of browser storage.

use super::{KeyValueStorage, StorageError, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
    disabled: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage rejecting writes once keys plus values exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Storage failing every operation, like a browser with storage turned off.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn ensure_enabled(&self) -> StorageResult<()> {
        if self.disabled {
            return Err(StorageError::Unavailable(
                "memory storage is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.ensure_enabled()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.ensure_enabled()?;
        let mut entries = self.entries.borrow_mut();

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(existing, stored)| existing.len() + stored.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.ensure_enabled()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStorage;
    use crate::storage::{KeyValueStorage, StorageError};

    #[test]
    fn set_replaces_previous_value() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn quota_counts_replaced_key_once() {
        let storage = MemoryStorage::with_quota(10);
        storage.set_item("k", "123456789").unwrap();
        storage.set_item("k", "987654321").unwrap();

        let err = storage.set_item("k", "0123456789").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                needed: 11,
                limit: 10,
                ..
            }
        ));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("987654321"));
    }

    #[test]
    fn disabled_storage_fails_reads_and_writes() {
        let storage = MemoryStorage::disabled();
        assert!(matches!(
            storage.get_item("k"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(storage.set_item("k", "v").is_err());
    }
}
