use chrono::NaiveDate;
use schoolboard_core::{
    Announcement, Notification, NotificationKind, Period, RecordId, SubstitutionEntry,
    SubstitutionKind,
};
use serde_json::{json, Value};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn announcement_uses_camel_case_and_iso_date() {
    let announcement = Announcement {
        id: RecordId::new("a1"),
        title: "Zeugnisausgabe".to_string(),
        message: "Aula".to_string(),
        author: "Administrator".to_string(),
        date: day(),
        created_at: 1_700_000_000_000,
    };

    let value = serde_json::to_value(&announcement).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "a1",
            "title": "Zeugnisausgabe",
            "message": "Aula",
            "author": "Administrator",
            "date": "2026-10-16",
            "createdAt": 1_700_000_000_000_i64,
        })
    );
}

#[test]
fn room_change_carries_type_tag_and_room_only() {
    let entry = SubstitutionEntry {
        id: RecordId::new("s1"),
        period: Period::Second,
        kind: SubstitutionKind::RoomChange {
            room: "C312".to_string(),
        },
        message: "Raumänderung: C312".to_string(),
        date: day(),
        created_at: 5,
    };

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["type"], "room-change");
    assert_eq!(value["room"], "C312");
    assert_eq!(value["period"], "3-4");
    assert!(value.get("teacher").is_none());
    assert!(value.get("kind").is_none());
}

#[test]
fn cancelled_entry_has_neither_teacher_nor_room() {
    let entry = SubstitutionEntry {
        id: RecordId::new("s2"),
        period: Period::Fourth,
        kind: SubstitutionKind::Cancelled,
        message: "Fällt aus aufgrund von: Krankheit".to_string(),
        date: day(),
        created_at: 6,
    };

    let value = serde_json::to_value(&entry).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object["type"], "cancelled");
    assert!(!object.contains_key("teacher"));
    assert!(!object.contains_key("room"));
    assert!(entry.is_cancelled());
}

#[test]
fn notification_serializes_type_read_and_created_at() {
    let notification = Notification {
        id: RecordId::new("n1"),
        kind: NotificationKind::Substitution,
        title: "Neue Vertretung".to_string(),
        message: "1-2: Wird vertreten von: Anna Müller".to_string(),
        read: false,
        created_at: 42,
    };

    let value = serde_json::to_value(&notification).unwrap();
    assert_eq!(value["type"], "substitution");
    assert_eq!(value["read"], Value::Bool(false));
    assert_eq!(value["createdAt"], 42);
}

#[test]
fn unknown_substitution_type_is_rejected() {
    let text = r#"{"id":"x","period":"1-2","type":"field-trip","message":"m","date":"2026-10-16","createdAt":1}"#;
    assert!(serde_json::from_str::<SubstitutionEntry>(text).is_err());
}

#[test]
fn unknown_period_label_is_rejected() {
    let text = r#"{"id":"x","period":"9-10","type":"cancelled","message":"m","date":"2026-10-16","createdAt":1}"#;
    let err = serde_json::from_str::<SubstitutionEntry>(text).unwrap_err();
    assert!(err.to_string().contains("9-10"));
}
