//! Browser `localStorage` backend for wasm32 hosts.

use super::{KeyValueStorage, StorageError, StorageResult};
use web_sys::{window, Storage};

/// Thin wrapper over `window.localStorage`.
///
/// The handle is resolved per call, so a page that disables storage after
/// start-up surfaces `Unavailable` instead of a stale handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> StorageResult<Storage> {
        let window = window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}
