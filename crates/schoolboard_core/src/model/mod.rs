//! Domain model for announcements, substitution entries and notifications.
//!
//! # Responsibility
//! - Define the canonical records owned by the entity store.
//! - Keep the persisted JSON shape stable (`camelCase` keys, `type` tags).
//!
//! # Invariants
//! - Every record is identified by a `RecordId` unique within its collection.
//! - `created_at` is epoch milliseconds and reflects insertion order.
//! - Substitution payload fields are keyed by the substitution type.

pub mod announcement;
pub mod notification;
pub mod substitution;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub use announcement::{Announcement, NewAnnouncement};
pub use notification::{Notification, NotificationKind};
pub use substitution::{NewSubstitution, Period, SubstitutionEntry, SubstitutionKind};

/// Unix epoch milliseconds.
pub type EpochMillis = i64;

/// Identifier shared by all store collections.
///
/// Generated ids are UUIDv7 strings, so their lexical order follows creation
/// order. Persisted ids of any string form are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generates a fresh time-ordered id.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Wraps an existing id value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Common view over records held in store collections.
pub trait Record {
    fn id(&self) -> &RecordId;
    fn created_at(&self) -> EpochMillis;
}

impl Record for Announcement {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> EpochMillis {
        self.created_at
    }
}

impl Record for SubstitutionEntry {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> EpochMillis {
        self.created_at
    }
}

impl Record for Notification {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> EpochMillis {
        self.created_at
    }
}
