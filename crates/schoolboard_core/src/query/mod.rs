//! Derived, read-only views over store snapshots.
//!
//! # Responsibility
//! - Calendar-day lookup of substitution entries.
//! - Case-insensitive text search across both entity kinds.
//! - Combined history feed with derived status.
//!
//! # Invariants
//! - Every view is recomputed from the slices it is given; nothing is cached.
//! - Feed ordering is `created_at DESC`, ties broken by `id DESC`.

pub mod by_date;
pub mod history;
pub mod search;

use crate::model::{Announcement, EpochMillis, RecordId, SubstitutionEntry};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Entity kind of a feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Announcement,
    Substitution,
}

/// Borrowed announcement or substitution entry in a merged feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedItem<'a> {
    Announcement(&'a Announcement),
    Substitution(&'a SubstitutionEntry),
}

impl<'a> FeedItem<'a> {
    pub fn kind(&self) -> FeedKind {
        match self {
            Self::Announcement(_) => FeedKind::Announcement,
            Self::Substitution(_) => FeedKind::Substitution,
        }
    }

    pub fn id(&self) -> &'a RecordId {
        match self {
            Self::Announcement(item) => &item.id,
            Self::Substitution(item) => &item.id,
        }
    }

    pub fn created_at(&self) -> EpochMillis {
        match self {
            Self::Announcement(item) => item.created_at,
            Self::Substitution(item) => item.created_at,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Announcement(item) => item.date,
            Self::Substitution(item) => item.date,
        }
    }

    /// Display title: the announcement title, or `Vertretung {period}`.
    pub fn title(&self) -> String {
        match self {
            Self::Announcement(item) => item.title.clone(),
            Self::Substitution(item) => format!("Vertretung {}", item.period),
        }
    }
}

fn merged_feed<'a>(
    announcements: &'a [Announcement],
    substitutions: &'a [SubstitutionEntry],
) -> impl Iterator<Item = FeedItem<'a>> {
    announcements
        .iter()
        .map(FeedItem::Announcement)
        .chain(substitutions.iter().map(FeedItem::Substitution))
}

fn newest_first(left: &FeedItem<'_>, right: &FeedItem<'_>) -> Ordering {
    right
        .created_at()
        .cmp(&left.created_at())
        .then_with(|| right.id().cmp(left.id()))
}
