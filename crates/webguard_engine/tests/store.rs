use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use webguard_core::digest;
use webguard_engine::{SnapshotStore, StoreError, SNAPSHOT_FILENAME};

#[test]
fn load_on_missing_record_is_absent_not_an_error() {
    let temp = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp.path());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips_content_and_hash() {
    let temp = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp.path());

    let hash = digest("V1");
    let saved = store.save("V1", &hash).unwrap();
    assert_eq!(saved.content, "V1");
    assert_eq!(saved.hash, hash);
    assert!(!saved.timestamp.is_empty());

    let loaded = store.load().unwrap().expect("snapshot present");
    assert_eq!(loaded, saved);
}

#[test]
fn save_overwrites_the_whole_record() {
    let temp = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp.path());

    store.save("V1", &digest("V1")).unwrap();
    store.save("V2", &digest("V2")).unwrap();

    let loaded = store.load().unwrap().expect("snapshot present");
    assert_eq!(loaded.content, "V2");
    assert_eq!(loaded.hash, digest("V2"));

    // Exactly one record on disk.
    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn save_creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    assert!(!data_dir.exists());

    let store = SnapshotStore::new(&data_dir);
    store.save("V1", &digest("V1")).unwrap();
    assert!(data_dir.join(SNAPSHOT_FILENAME).is_file());
}

#[test]
fn corrupt_record_is_an_error_not_absence() {
    let temp = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp.path());
    fs::write(store.path(), "{ not json").unwrap();

    match store.load() {
        Err(StoreError::Corrupt { .. }) => {}
        other => panic!("expected corrupt-record error, got {other:?}"),
    }
}

#[test]
fn persisted_layout_uses_original_field_names() {
    let temp = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp.path());
    store.save("V1", &digest("V1")).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json.get("timestamp").is_some());
    assert!(json.get("content").is_some());
    assert!(json.get("hash").is_some());
}
