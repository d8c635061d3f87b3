//! User-facing alerts derived from entity creation.
//!
//! # Responsibility
//! - Define the notification record and its derived-title constants.
//! - Provide pure helpers over notification snapshots (unread count,
//!   relative time labels).
//!
//! # Invariants
//! - Notifications are never created directly by callers; the store derives
//!   them from announcement/substitution creation.
//! - `read` only flips `false -> true` for a single notification.

use super::announcement::Announcement;
use super::substitution::SubstitutionEntry;
use super::{EpochMillis, RecordId};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const ANNOUNCEMENT_NOTIFICATION_TITLE: &str = "Neue Ankündigung";
pub const SUBSTITUTION_NOTIFICATION_TITLE: &str = "Neue Vertretung";

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Source category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Announcement,
    Substitution,
    /// System messages; only present in seed or persisted data.
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: EpochMillis,
}

impl Notification {
    /// Derives the alert emitted when `announcement` is created.
    pub(crate) fn announcement_created(
        id: RecordId,
        created_at: EpochMillis,
        announcement: &Announcement,
    ) -> Self {
        Self {
            id,
            kind: NotificationKind::Announcement,
            title: ANNOUNCEMENT_NOTIFICATION_TITLE.to_string(),
            message: announcement.title.clone(),
            read: false,
            created_at,
        }
    }

    /// Derives the alert emitted when `entry` is created.
    ///
    /// Message format: `"{period}: {message}"`.
    pub(crate) fn substitution_created(
        id: RecordId,
        created_at: EpochMillis,
        entry: &SubstitutionEntry,
    ) -> Self {
        Self {
            id,
            kind: NotificationKind::Substitution,
            title: SUBSTITUTION_NOTIFICATION_TITLE.to_string(),
            message: format!("{}: {}", entry.period, entry.message),
            read: false,
            created_at,
        }
    }

    pub(crate) fn mark_read(&mut self) {
        self.read = true;
    }
}

/// Counts notifications with `read == false`.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|item| !item.read).count()
}

/// Formats the age of a notification for list display.
///
/// - under one minute: `Gerade eben`
/// - under one hour: `Vor {n} Min`
/// - under one day: `Vor {n} Std`
/// - under one week: `Vor {n} Tagen`
/// - otherwise the local calendar date as `d.m.yyyy` (`1.5.2026`)
///
/// Timestamps in the future are treated as "just now".
pub fn relative_time_label(created_at: EpochMillis, now: EpochMillis) -> String {
    let diff = now.saturating_sub(created_at).max(0);
    if diff < MINUTE_MS {
        return "Gerade eben".to_string();
    }
    if diff < HOUR_MS {
        return format!("Vor {} Min", diff / MINUTE_MS);
    }
    if diff < DAY_MS {
        return format!("Vor {} Std", diff / HOUR_MS);
    }
    if diff < 7 * DAY_MS {
        return format!("Vor {} Tagen", diff / DAY_MS);
    }

    DateTime::from_timestamp_millis(created_at)
        .map(|instant| instant.with_timezone(&Local).format("%-d.%-m.%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{relative_time_label, DAY_MS, HOUR_MS, MINUTE_MS};
    use chrono::{Local, TimeZone};

    const NOW: i64 = 1_760_000_000_000;

    #[test]
    fn relative_labels_follow_thresholds() {
        assert_eq!(relative_time_label(NOW - 10_000, NOW), "Gerade eben");
        assert_eq!(relative_time_label(NOW - 5 * MINUTE_MS, NOW), "Vor 5 Min");
        assert_eq!(relative_time_label(NOW - 3 * HOUR_MS, NOW), "Vor 3 Std");
        assert_eq!(relative_time_label(NOW - 2 * DAY_MS, NOW), "Vor 2 Tagen");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(relative_time_label(NOW + HOUR_MS, NOW), "Gerade eben");
    }

    #[test]
    fn old_timestamps_render_as_unpadded_local_date() {
        let created_at = Local
            .with_ymd_and_hms(2026, 5, 1, 12, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis();
        assert_eq!(
            relative_time_label(created_at, created_at + 30 * DAY_MS),
            "1.5.2026"
        );
    }
}
