#![cfg(not(target_arch = "wasm32"))]

use schoolboard_core::db::migrations::{apply_migrations, latest_version, schema_version};
use schoolboard_core::db::{open_db, open_db_in_memory, DbError};
use schoolboard_core::{KeyValueStorage, SqliteStorage, StorageError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_key_value_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "kv_store");
}

#[test]
fn opening_same_database_twice_keeps_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schoolboard.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first).unwrap(), latest_version());
    conn_first
        .execute(
            "INSERT INTO kv_store (key, value) VALUES ('announcements', '[]');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second).unwrap(), latest_version());
    let value: String = conn_second
        .query_row(
            "SELECT value FROM kv_store WHERE key = 'announcements';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "[]");
}

#[test]
fn migrations_run_once_per_connection() {
    let mut conn = Connection::open_in_memory().unwrap();

    assert_eq!(apply_migrations(&mut conn).unwrap(), latest_version() as usize);
    assert_eq!(apply_migrations(&mut conn).unwrap(), 0);
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("school").join("board.sqlite3");

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    assert_table_exists(&conn, "kv_store");
}

#[test]
fn writes_stamp_updated_at() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    storage.set_item("notifications", "[]").unwrap();
    assert_eq!(storage.keys().unwrap(), vec!["notifications"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamped.sqlite3");
    SqliteStorage::open(&path)
        .unwrap()
        .set_item("substitutions", "[]")
        .unwrap();

    let conn = open_db(&path).unwrap();
    let updated_at: i64 = conn
        .query_row(
            "SELECT updated_at FROM kv_store WHERE key = 'substitutions';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(updated_at > 0);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let storage_err = SqliteStorage::open(&path).err().unwrap();
    assert!(matches!(
        storage_err,
        StorageError::Db(DbError::UnsupportedSchemaVersion { .. })
    ));
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
