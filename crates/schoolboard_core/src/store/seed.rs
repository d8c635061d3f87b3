//! Fallback data used when nothing usable is persisted.
//!
//! Dates and timestamps are relative to the store clock so a fresh install
//! always shows entries for today and tomorrow.

use crate::model::{
    Announcement, EpochMillis, Notification, NotificationKind, Period, RecordId,
    SubstitutionEntry, SubstitutionKind,
};
use crate::model::notification::{ANNOUNCEMENT_NOTIFICATION_TITLE, SUBSTITUTION_NOTIFICATION_TITLE};
use chrono::NaiveDate;

const HOUR_MS: EpochMillis = 3_600_000;
const DAY_MS: EpochMillis = 24 * HOUR_MS;

pub(crate) fn announcements(now: EpochMillis, today: NaiveDate) -> Vec<Announcement> {
    vec![
        Announcement {
            id: RecordId::new("1"),
            title: "Lehrer Besprechung".to_string(),
            message: "Aufgrund einer Lehrer Besprechung fallen die 5 - 6 Stunde für alle \
                      Mechatroniker/innen aus."
                .to_string(),
            author: "Administrator".to_string(),
            date: today,
            created_at: now,
        },
        Announcement {
            id: RecordId::new("2"),
            title: "Zeugnisausgabe".to_string(),
            message: "Am 22.11.2025 findet die Zeugnisausgabe statt.".to_string(),
            author: "Administrator".to_string(),
            date: today,
            created_at: now - DAY_MS,
        },
    ]
}

pub(crate) fn substitutions(now: EpochMillis, today: NaiveDate) -> Vec<SubstitutionEntry> {
    let tomorrow = today.succ_opt().unwrap_or(today);
    let entry = |id: &str, period, kind, message: &str, date, created_at| SubstitutionEntry {
        id: RecordId::new(id),
        period,
        kind,
        message: message.to_string(),
        date,
        created_at,
    };

    vec![
        entry(
            "1",
            Period::First,
            SubstitutionKind::Substitution {
                teacher: "Mirko Klenner".to_string(),
            },
            "Wird vertreten von: Mirko Klenner",
            today,
            now,
        ),
        entry(
            "2",
            Period::Second,
            SubstitutionKind::RoomChange {
                room: "C312".to_string(),
            },
            "Raumänderung: G410 > C312",
            today,
            now - 1,
        ),
        entry(
            "3",
            Period::Third,
            SubstitutionKind::Cancelled,
            "Fällt aus aufgrund von: Besprechung",
            today,
            now - 2,
        ),
        entry(
            "4",
            Period::First,
            SubstitutionKind::Substitution {
                teacher: "Anna Müller".to_string(),
            },
            "Wird vertreten von: Anna Müller",
            tomorrow,
            now - DAY_MS,
        ),
        entry(
            "5",
            Period::Second,
            SubstitutionKind::RoomChange {
                room: "B205".to_string(),
            },
            "Raumänderung: A101 > B205",
            tomorrow,
            now - DAY_MS - 1,
        ),
    ]
}

pub(crate) fn notifications(now: EpochMillis) -> Vec<Notification> {
    let notification = |id: &str, kind, title: &str, message: &str, created_at| Notification {
        id: RecordId::new(id),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        read: false,
        created_at,
    };

    vec![
        notification(
            "1",
            NotificationKind::Announcement,
            ANNOUNCEMENT_NOTIFICATION_TITLE,
            "Lehrer Besprechung wurde erstellt",
            now - HOUR_MS,
        ),
        notification(
            "2",
            NotificationKind::Substitution,
            SUBSTITUTION_NOTIFICATION_TITLE,
            "Vertretung für 1-2 Stunde wurde hinzugefügt",
            now - 2 * HOUR_MS,
        ),
        notification(
            "3",
            NotificationKind::Info,
            "System-Update",
            "Das System wurde aktualisiert",
            now - DAY_MS,
        ),
    ]
}
