//! Announcement records.
//!
//! # Invariants
//! - Announcements are immutable once created; the only lifecycle change is
//!   deletion through the store.

use super::{EpochMillis, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// School-wide announcement shown on the start page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    pub author: String,
    /// Calendar day the announcement refers to (`YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
    pub created_at: EpochMillis,
}

/// Caller-supplied announcement fields; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub author: String,
    pub date: NaiveDate,
}

impl NewAnnouncement {
    pub(crate) fn into_announcement(self, id: RecordId, created_at: EpochMillis) -> Announcement {
        Announcement {
            id,
            title: self.title,
            message: self.message,
            author: self.author,
            date: self.date,
            created_at,
        }
    }
}
