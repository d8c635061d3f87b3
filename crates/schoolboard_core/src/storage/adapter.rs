//! Fault-absorbing persistence adapter.
//!
//! # Responsibility
//! - Read and write serialized collections through a `KeyValueStorage`.
//! - Convert every backend fault into "absent" (load) or "no-op" (save).
//!
//! # Invariants
//! - `load` and `save` never return errors and never panic.
//! - After the first failed write the adapter is degraded: later writes are
//!   skipped and the session continues in memory only.

use super::KeyValueStorage;
use log::{debug, warn};
use std::cell::Cell;

pub struct PersistenceAdapter<S> {
    storage: S,
    degraded: Cell<bool>,
}

impl<S: KeyValueStorage> PersistenceAdapter<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            degraded: Cell::new(false),
        }
    }

    /// Returns stored text for `key`, or `None` when absent or unreadable.
    pub fn load(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => {
                debug!(
                    "event=storage_load module=storage status=ok key={} found={}",
                    key,
                    value.is_some()
                );
                value
            }
            Err(err) => {
                warn!(
                    "event=storage_load module=storage status=error key={} error={}",
                    key, err
                );
                None
            }
        }
    }

    /// Writes `text` under `key`; failures are logged and swallowed.
    pub fn save(&self, key: &str, text: &str) {
        if self.degraded.get() {
            debug!(
                "event=storage_save module=storage status=skipped reason=degraded key={}",
                key
            );
            return;
        }

        match self.storage.set_item(key, text) {
            Ok(()) => debug!(
                "event=storage_save module=storage status=ok key={} bytes={}",
                key,
                text.len()
            ),
            Err(err) => {
                self.degraded.set(true);
                warn!(
                    "event=storage_save module=storage status=degraded key={} error={}",
                    key, err
                );
            }
        }
    }

    /// Whether a write has failed and persistence is switched off.
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
