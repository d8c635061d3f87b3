//! Key-value persistence backends and the fault-absorbing adapter.
//!
//! # Responsibility
//! - Define the `KeyValueStorage` contract mirroring browser local storage.
//! - Provide an in-memory backend everywhere, SQLite on native targets and
//!   `localStorage` on wasm32.
//! - Wrap backends in `PersistenceAdapter`, which never fails outward.
//!
//! # Invariants
//! - Backends report faults as `StorageError`; only the adapter swallows them.
//! - Values are opaque UTF-8 text; backends never inspect them.

mod adapter;
#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod sqlite;

pub use adapter::PersistenceAdapter;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;
pub use memory::MemoryStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use sqlite::SqliteStorage;

#[cfg(not(target_arch = "wasm32"))]
use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type StorageResult<T> = Result<T, StorageError>;

/// Fault raised by a key-value backend.
#[derive(Debug)]
pub enum StorageError {
    /// Storage is disabled or cannot be reached.
    Unavailable(String),
    /// Writing `key` would exceed the backend capacity.
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
    /// Backend-specific failure without a richer mapping.
    Backend(String),
    #[cfg(not(target_arch = "wasm32"))]
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            Self::QuotaExceeded { key, needed, limit } => write!(
                f,
                "storage quota exceeded writing `{key}`: {needed} bytes needed, limit {limit}"
            ),
            Self::Backend(message) => write!(f, "storage backend error: {message}"),
            #[cfg(not(target_arch = "wasm32"))]
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value storage with browser `localStorage` semantics.
///
/// `set_item` replaces any previous value. Missing keys read as `Ok(None)`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
