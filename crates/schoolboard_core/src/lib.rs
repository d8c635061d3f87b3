//! Core state store for the school board app.
//! This crate is the single source of truth for announcement, substitution
//! and notification invariants.
//!
//! Native builds carry the SQLite backend and file logging; wasm32 builds
//! persist through `storage::BrowserStorage` instead.

pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod db;
pub mod forms;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;

pub use config::{StorageKeys, StoreConfig};
pub use forms::{AnnouncementDraft, FormError, SubstitutionDraft};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::notification::{relative_time_label, unread_count};
pub use model::{
    Announcement, EpochMillis, NewAnnouncement, NewSubstitution, Notification, NotificationKind,
    Period, RecordId, SubstitutionEntry, SubstitutionKind,
};
pub use query::by_date::{parse_calendar_day, AsCalendarDay};
pub use query::history::{HistoryItem, HistoryStatus};
pub use query::search::{MatchRank, SearchHit};
pub use query::{FeedItem, FeedKind};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::SqliteStorage;
pub use storage::{KeyValueStorage, MemoryStorage, PersistenceAdapter, StorageError};
pub use store::{
    Clock, LoadReport, LoadSource, ManualClock, SchoolStore, SharedStore, SystemClock,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
