use chrono::NaiveDate;
use schoolboard_core::{
    unread_count, ManualClock, MemoryStorage, NewAnnouncement, RecordId, SchoolStore,
    StorageKeys,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn announcement(title: &str) -> NewAnnouncement {
    NewAnnouncement {
        title: title.to_string(),
        message: "body".to_string(),
        author: "Administrator".to_string(),
        date: today(),
    }
}

#[test]
fn unread_count_matches_collection_after_every_operation() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at_noon(today());
    let mut store = SchoolStore::open_with(&storage, &clock, StorageKeys::default());

    let check = |store: &SchoolStore<&MemoryStorage, &ManualClock>| {
        let expected = store.notifications().iter().filter(|n| !n.read).count();
        assert_eq!(store.unread_notifications(), expected);
        assert_eq!(unread_count(store.notifications()), expected);
    };

    check(&store);
    store.add_announcement(announcement("eins"));
    check(&store);
    let first = store.notifications()[0].id.clone();
    store.mark_notification_as_read(&first);
    check(&store);
    store.add_announcement(announcement("zwei"));
    check(&store);
    store.mark_all_notifications_as_read();
    check(&store);
    assert_eq!(store.unread_notifications(), 0);
}

#[test]
fn mark_as_read_flips_only_the_target() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at_noon(today());
    let mut store = SchoolStore::open_with(&storage, &clock, StorageKeys::default());
    store.add_announcement(announcement("eins"));
    store.add_announcement(announcement("zwei"));
    let unread_before = store.unread_notifications();

    let target = store.notifications()[1].id.clone();
    store.mark_notification_as_read(&target);
    store.mark_notification_as_read(&target);

    assert_eq!(store.unread_notifications(), unread_before - 1);
    assert!(store.notifications()[1].read);
    assert!(!store.notifications()[0].read);
}

#[test]
fn mark_as_read_with_unknown_id_is_noop() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at_noon(today());
    let mut store = SchoolStore::open_with(&storage, &clock, StorageKeys::default());
    let before = store.notifications().to_vec();

    store.mark_notification_as_read(&RecordId::new("missing"));

    assert_eq!(store.notifications(), before.as_slice());
}

#[test]
fn clear_empties_collection_and_new_adds_still_notify() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at_noon(today());
    let mut store = SchoolStore::open_with(&storage, &clock, StorageKeys::default());

    store.clear_notifications();
    assert!(store.notifications().is_empty());
    assert_eq!(store.unread_notifications(), 0);

    store.add_announcement(announcement("nach dem Leeren"));
    assert_eq!(store.notifications().len(), 1);
    assert_eq!(store.unread_notifications(), 1);
}

#[test]
fn notifications_are_newest_first() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at_noon(today());
    let mut store = SchoolStore::open_with(&storage, &clock, StorageKeys::default());

    store.add_announcement(announcement("alt"));
    clock.advance_ms(60_000);
    store.add_announcement(announcement("neu"));

    assert_eq!(store.notifications()[0].message, "neu");
    assert_eq!(store.notifications()[1].message, "alt");
    for pair in store.notifications().windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn seed_notifications_start_unread() {
    let storage = MemoryStorage::new();
    let clock = ManualClock::at_noon(today());
    let store = SchoolStore::open_with(&storage, &clock, StorageKeys::default());

    assert_eq!(store.notifications().len(), 3);
    assert_eq!(store.unread_notifications(), 3);
}
