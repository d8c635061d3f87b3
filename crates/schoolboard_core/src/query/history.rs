//! Combined history feed.
//!
//! Status is derived on every call and never stored:
//! - `type = cancelled` substitutions are always `Cancelled`.
//! - Any other item dated before today is `Completed`.
//! - Items dated today or later are `Active` (there is no separate
//!   "upcoming" state).

use super::{merged_feed, newest_first, FeedItem};
use crate::model::{Announcement, SubstitutionEntry};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStatus {
    Active,
    Completed,
    Cancelled,
}

impl HistoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryItem<'a> {
    pub item: FeedItem<'a>,
    pub status: HistoryStatus,
}

/// Derives the display status of `item` relative to `today`.
pub fn derive_status(item: &FeedItem<'_>, today: NaiveDate) -> HistoryStatus {
    if let FeedItem::Substitution(entry) = item {
        if entry.is_cancelled() {
            return HistoryStatus::Cancelled;
        }
    }

    if item.date() < today {
        HistoryStatus::Completed
    } else {
        HistoryStatus::Active
    }
}

/// Merges both collections into one feed sorted by creation time, newest first.
///
/// Ordering is independent of the `date` used for the status.
pub fn history<'a>(
    announcements: &'a [Announcement],
    substitutions: &'a [SubstitutionEntry],
    today: NaiveDate,
) -> Vec<HistoryItem<'a>> {
    let mut feed = merged_feed(announcements, substitutions).collect::<Vec<_>>();
    feed.sort_by(newest_first);
    feed.into_iter()
        .map(|item| HistoryItem {
            status: derive_status(&item, today),
            item,
        })
        .collect()
}
