//! Shared application state store.
//!
//! # Responsibility
//! - Own the announcement, substitution and notification collections.
//! - Provide the only mutators for those collections.
//! - Derive one notification per created announcement/substitution.
//! - Persist every touched collection after each mutation.
//!
//! # Invariants
//! - Ids are unique within each collection.
//! - Collections are ordered newest-first; `created_at` is strictly
//!   increasing across all records created by one store.
//! - Deleting an entity never retracts its notification.
//! - No operation fails visibly: persistence faults degrade to in-memory
//!   operation, lookup misses are no-ops.
//!
//! # Ownership
//! A `SchoolStore` is an explicit container handed to its consumers; it is not
//! a process-wide singleton. Hosts that need shared access wrap it in
//! `Rc<RefCell<_>>` (see [`SharedStore`]).

mod clock;
mod seed;

pub use clock::{Clock, ManualClock, SystemClock};

use crate::config::StorageKeys;
use crate::model::notification::unread_count;
use crate::model::{
    Announcement, EpochMillis, NewAnnouncement, NewSubstitution, Notification, Record, RecordId,
    SubstitutionEntry,
};
use crate::query::by_date::{substitutions_on, AsCalendarDay};
use crate::query::history::{history, HistoryItem};
use crate::query::search::{search, SearchHit};
use crate::storage::{KeyValueStorage, PersistenceAdapter};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Store shared between several consumers of one single-threaded host.
pub type SharedStore<S, C = SystemClock> = Rc<RefCell<SchoolStore<S, C>>>;

/// Where a collection came from when the store was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    Seed,
}

/// Load outcome of the three collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub announcements: LoadSource,
    pub substitutions: LoadSource,
    pub notifications: LoadSource,
}

pub struct SchoolStore<S, C = SystemClock> {
    announcements: Vec<Announcement>,
    substitutions: Vec<SubstitutionEntry>,
    notifications: Vec<Notification>,
    persistence: PersistenceAdapter<S>,
    keys: StorageKeys,
    clock: C,
    last_created_at: EpochMillis,
    load_report: LoadReport,
}

impl<S: KeyValueStorage> SchoolStore<S, SystemClock> {
    /// Opens a store over `storage` with the wall clock and default keys.
    pub fn open(storage: S) -> Self {
        Self::open_with(storage, SystemClock, StorageKeys::default())
    }
}

impl<S: KeyValueStorage, C: Clock> SchoolStore<S, C> {
    /// Opens a store, restoring persisted collections or falling back to seed
    /// data per collection.
    ///
    /// A collection is restored only when its stored text parses as a
    /// non-empty JSON array of records. Seeded collections are written back so
    /// later sessions see the same data.
    pub fn open_with(storage: S, clock: C, keys: StorageKeys) -> Self {
        let persistence = PersistenceAdapter::new(storage);
        let now = clock.now_ms();
        let today = clock.today();

        let (announcements, announcements_source) =
            match load_collection(&persistence, &keys.announcements) {
                Some(items) => (items, LoadSource::Persisted),
                None => (seed::announcements(now, today), LoadSource::Seed),
            };
        let (substitutions, substitutions_source) =
            match load_collection(&persistence, &keys.substitutions) {
                Some(items) => (items, LoadSource::Persisted),
                None => (seed::substitutions(now, today), LoadSource::Seed),
            };
        let (notifications, notifications_source) =
            match load_collection(&persistence, &keys.notifications) {
                Some(items) => (items, LoadSource::Persisted),
                None => (seed::notifications(now), LoadSource::Seed),
            };

        let last_created_at = announcements
            .iter()
            .map(Record::created_at)
            .chain(substitutions.iter().map(Record::created_at))
            .chain(notifications.iter().map(Record::created_at))
            .max()
            .unwrap_or(EpochMillis::MIN);

        let store = Self {
            announcements,
            substitutions,
            notifications,
            persistence,
            keys,
            clock,
            last_created_at,
            load_report: LoadReport {
                announcements: announcements_source,
                substitutions: substitutions_source,
                notifications: notifications_source,
            },
        };

        if announcements_source == LoadSource::Seed {
            store.persist_announcements();
        }
        if substitutions_source == LoadSource::Seed {
            store.persist_substitutions();
        }
        if notifications_source == LoadSource::Seed {
            store.persist_notifications();
        }

        info!(
            "event=store_open module=store status=ok announcements={} substitutions={} notifications={} seeded={}",
            store.announcements.len(),
            store.substitutions.len(),
            store.notifications.len(),
            store.seeded_collection_count()
        );
        store
    }

    /// Wraps the store for shared single-threaded access.
    pub fn into_shared(self) -> SharedStore<S, C> {
        Rc::new(RefCell::new(self))
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn substitutions(&self) -> &[SubstitutionEntry] {
        &self.substitutions
    }

    /// Notifications, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Number of unread notifications, recomputed on every call.
    pub fn unread_notifications(&self) -> usize {
        unread_count(&self.notifications)
    }

    pub fn load_report(&self) -> LoadReport {
        self.load_report
    }

    /// Whether persistence failed and the session runs in memory only.
    pub fn is_persistence_degraded(&self) -> bool {
        self.persistence.is_degraded()
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Creates an announcement and its `Neue Ankündigung` notification.
    ///
    /// Returns the new announcement id. Input is not validated.
    pub fn add_announcement(&mut self, input: NewAnnouncement) -> RecordId {
        let created_at = self.next_created_at();
        let id = fresh_id(&self.announcements);
        let announcement = input.into_announcement(id.clone(), created_at);
        let notification = Notification::announcement_created(
            fresh_id(&self.notifications),
            created_at,
            &announcement,
        );

        self.announcements.insert(0, announcement);
        self.notifications.insert(0, notification);
        info!(
            "event=announcement_add module=store status=ok id={} total={}",
            id,
            self.announcements.len()
        );

        self.persist_announcements();
        self.persist_notifications();
        id
    }

    /// Creates a substitution entry and its `Neue Vertretung` notification.
    ///
    /// Returns the new entry id. Input is not validated.
    pub fn add_substitution(&mut self, input: NewSubstitution) -> RecordId {
        let created_at = self.next_created_at();
        let id = fresh_id(&self.substitutions);
        let entry = input.into_entry(id.clone(), created_at);
        let notification = Notification::substitution_created(
            fresh_id(&self.notifications),
            created_at,
            &entry,
        );

        info!(
            "event=substitution_add module=store status=ok id={} type={} period={} date={}",
            id,
            entry.kind.tag(),
            entry.period,
            entry.date
        );
        self.substitutions.insert(0, entry);
        self.notifications.insert(0, notification);

        self.persist_substitutions();
        self.persist_notifications();
        id
    }

    /// Removes the announcement with `id`; absent ids are a no-op.
    pub fn delete_announcement(&mut self, id: &RecordId) {
        let removed = remove_by_id(&mut self.announcements, id);
        debug!(
            "event=announcement_delete module=store status=ok id={} removed={}",
            id, removed
        );
        self.persist_announcements();
    }

    /// Removes the substitution entry with `id`; absent ids are a no-op.
    pub fn delete_substitution(&mut self, id: &RecordId) {
        let removed = remove_by_id(&mut self.substitutions, id);
        debug!(
            "event=substitution_delete module=store status=ok id={} removed={}",
            id, removed
        );
        self.persist_substitutions();
    }

    /// Entries dated on the calendar day of `day`, in collection order.
    pub fn substitutions_by_date<D: AsCalendarDay>(&self, day: D) -> Vec<&SubstitutionEntry> {
        substitutions_on(&self.substitutions, day)
    }

    /// Marks one notification as read; absent ids are a no-op.
    pub fn mark_notification_as_read(&mut self, id: &RecordId) {
        if let Some(notification) = self.notifications.iter_mut().find(|item| &item.id == id) {
            notification.mark_read();
        }
        self.persist_notifications();
    }

    pub fn mark_all_notifications_as_read(&mut self) {
        self.notifications.iter_mut().for_each(Notification::mark_read);
        debug!(
            "event=notifications_read_all module=store status=ok total={}",
            self.notifications.len()
        );
        self.persist_notifications();
    }

    pub fn clear_notifications(&mut self) {
        let cleared = self.notifications.len();
        self.notifications.clear();
        debug!(
            "event=notifications_clear module=store status=ok cleared={}",
            cleared
        );
        self.persist_notifications();
    }

    /// Case-insensitive search across announcements and substitutions.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        search(&self.announcements, &self.substitutions, query)
    }

    /// Combined feed with status derived against the clock's current day.
    pub fn history(&self) -> Vec<HistoryItem<'_>> {
        history(&self.announcements, &self.substitutions, self.clock.today())
    }

    /// Replaces every collection with fresh seed data and persists it.
    pub fn reset_to_seed(&mut self) {
        let now = self.next_created_at();
        let today = self.clock.today();
        self.announcements = seed::announcements(now, today);
        self.substitutions = seed::substitutions(now, today);
        self.notifications = seed::notifications(now);
        info!("event=store_reset module=store status=ok");

        self.persist_announcements();
        self.persist_substitutions();
        self.persist_notifications();
    }

    fn next_created_at(&mut self) -> EpochMillis {
        let created_at = self
            .clock
            .now_ms()
            .max(self.last_created_at.saturating_add(1));
        self.last_created_at = created_at;
        created_at
    }

    fn seeded_collection_count(&self) -> usize {
        [
            self.load_report.announcements,
            self.load_report.substitutions,
            self.load_report.notifications,
        ]
        .into_iter()
        .filter(|source| *source == LoadSource::Seed)
        .count()
    }

    fn persist_announcements(&self) {
        persist_collection(&self.persistence, &self.keys.announcements, &self.announcements);
    }

    fn persist_substitutions(&self) {
        persist_collection(&self.persistence, &self.keys.substitutions, &self.substitutions);
    }

    fn persist_notifications(&self) {
        persist_collection(&self.persistence, &self.keys.notifications, &self.notifications);
    }
}

fn load_collection<S, T>(persistence: &PersistenceAdapter<S>, key: &str) -> Option<Vec<T>>
where
    S: KeyValueStorage,
    T: DeserializeOwned + Record,
{
    let text = persistence.load(key)?;
    let items = match serde_json::from_str::<Vec<T>>(&text) {
        Ok(items) => items,
        Err(err) => {
            warn!(
                "event=store_load module=store status=invalid key={} error={}",
                key, err
            );
            return None;
        }
    };

    if items.is_empty() {
        debug!("event=store_load module=store status=empty key={}", key);
        return None;
    }

    Some(normalize_collection(items, key))
}

/// Orders newest-first and drops repeated ids, keeping the first occurrence.
fn normalize_collection<T: Record>(mut items: Vec<T>, key: &str) -> Vec<T> {
    items.sort_by(|left, right| right.created_at().cmp(&left.created_at()));

    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    items.retain(|item| seen.insert(item.id().clone()));
    if items.len() != before {
        warn!(
            "event=store_load module=store status=deduplicated key={} dropped={}",
            key,
            before - items.len()
        );
    }
    items
}

fn persist_collection<S, T>(persistence: &PersistenceAdapter<S>, key: &str, items: &[T])
where
    S: KeyValueStorage,
    T: Serialize,
{
    match serde_json::to_string(items) {
        Ok(text) => persistence.save(key, &text),
        Err(err) => warn!(
            "event=store_persist module=store status=error key={} error={}",
            key, err
        ),
    }
}

fn fresh_id<T: Record>(items: &[T]) -> RecordId {
    loop {
        let id = RecordId::generate();
        if !items.iter().any(|item| item.id() == &id) {
            return id;
        }
    }
}

fn remove_by_id<T: Record>(items: &mut Vec<T>, id: &RecordId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}
