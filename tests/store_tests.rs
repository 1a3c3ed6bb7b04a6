mod common;
use chrono::NaiveDate;
use common::{alternate, setup_test_store};
use rworklogger::db::pool::StoreLocation;
use rworklogger::db::{COLLECTION_NAME, DATABASE_NAME, RecordStore, shared};
use rworklogger::errors::AppError;
use rworklogger::models::productivity::Productivity;
use rworklogger::models::work_entry::WorkEntry;
use serde_json::Value;
use std::path::PathBuf;

fn entry() -> WorkEntry {
    WorkEntry::new(
        "John",
        "Login module development",
        "Coding",
        60,
        Productivity::Productive,
        NaiveDate::from_ymd_opt(2024, 1, 3).expect("date"),
    )
    .expect("valid entry")
}

#[test]
fn test_insert_then_find_all_round_trip() {
    let path = setup_test_store("store_round_trip");
    let store = RecordStore::connect(&path).expect("connect");

    store.insert(&entry()).expect("insert");

    let records = store.find_all().expect("find_all");
    assert_eq!(records.len(), 1);

    let r = &records[0];
    assert_eq!(r["person"], "John");
    assert_eq!(r["task"], "Login module development");
    assert_eq!(r["task_type"], "Coding");
    assert_eq!(r["time"], 60);
    assert_eq!(r["productivity"], "productive");
    let date = r["date"].as_str().expect("date string");
    assert!(date.starts_with("2024-01-03"));
}

#[test]
fn test_find_all_strips_row_id() {
    let store = RecordStore::connect(":memory:").expect("connect");
    store.insert(&entry()).expect("insert");

    let records = store.find_all().expect("find_all");
    let keys: Vec<&String> = records[0].keys().collect();
    assert_eq!(keys.len(), 6, "unexpected keys: {keys:?}");
    assert!(!records[0].contains_key("id"));
    assert!(!records[0].contains_key("_id"));
}

#[test]
fn test_empty_collection_is_not_an_error() {
    let store = RecordStore::connect(":memory:").expect("connect");
    let records = store.find_all().expect("empty fetch must succeed");
    assert!(records.is_empty());
    assert_eq!(store.count().expect("count"), 0);
}

#[test]
fn test_fetch_failure_is_distinguishable_from_empty() {
    let store = RecordStore::connect(":memory:").expect("connect");
    store
        .conn
        .execute_batch("DROP TABLE documents;")
        .expect("drop");

    assert!(matches!(store.find_all(), Err(AppError::Fetch(_))));
    // the dashboard view degrades to an empty data set
    assert!(store.load_records().is_empty());
}

#[test]
fn test_insert_failure_is_reported() {
    let store = RecordStore::connect(":memory:").expect("connect");
    store
        .conn
        .execute_batch("DROP TABLE documents;")
        .expect("drop");

    assert!(matches!(store.insert(&entry()), Err(AppError::Write(_))));
}

#[test]
fn test_connect_fails_fast_on_missing_directory() {
    let mut path = std::env::temp_dir();
    path.push("rworklogger_no_such_dir");
    path.push("nested");
    path.push("store.sqlite");

    let result = RecordStore::connect(&path.to_string_lossy());
    assert!(matches!(result, Err(AppError::Connection(_))));
}

#[test]
fn test_connect_rejects_unknown_scheme() {
    let result = RecordStore::connect("mongodb+srv://user@cluster0.example.net/");
    match result {
        Err(AppError::Connection(msg)) => assert!(msg.contains("mongodb+srv")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("connect should have failed"),
    }
}

#[test]
fn test_store_location_parsing() {
    assert_eq!(
        StoreLocation::parse(":memory:").expect("memory"),
        StoreLocation::Memory
    );
    assert_eq!(
        StoreLocation::parse("sqlite:///tmp/x.sqlite").expect("sqlite"),
        StoreLocation::File(PathBuf::from("/tmp/x.sqlite"))
    );
    assert_eq!(
        StoreLocation::parse("file:/tmp/y.sqlite").expect("file"),
        StoreLocation::File(PathBuf::from("/tmp/y.sqlite"))
    );
    assert!(StoreLocation::parse("   ").is_err());
}

#[test]
fn test_collections_are_isolated() {
    let path = setup_test_store("store_isolated");
    let main = RecordStore::connect(&path).expect("connect");
    let other = RecordStore::connect(&path)
        .expect("connect")
        .with_collection("work-time-tracker", "archive");

    main.insert(&entry()).expect("insert");
    other
        .insert_raw(&alternate("Ola", "Raport", "Analysis", 45, "productive", "2023-05-02"))
        .expect("insert raw");

    assert_eq!(main.collection(), (DATABASE_NAME, COLLECTION_NAME));
    assert_eq!(main.count().expect("count"), 1);
    assert_eq!(other.count().expect("count"), 1);

    let archived = other.find_all().expect("find_all");
    assert_eq!(archived[0]["osoba"], Value::from("Ola"));
}

#[test]
fn test_documents_keep_insertion_order() {
    let store = RecordStore::connect(":memory:").expect("connect");
    for person in ["A", "B", "C"] {
        let mut e = entry();
        e.person = person.to_string();
        store.insert(&e).expect("insert");
    }

    let persons: Vec<String> = store
        .find_all()
        .expect("find_all")
        .iter()
        .map(|r| r["person"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(persons, ["A", "B", "C"]);
}

#[test]
fn test_shared_handle_is_initialized_once() {
    let first = setup_test_store("store_shared_first");
    let second = setup_test_store("store_shared_second");

    assert!(!shared::is_initialized());

    {
        let store = shared::open(&first).expect("open");
        store.insert(&entry()).expect("insert");
    }
    assert!(shared::is_initialized());

    // later calls reuse the first handle and ignore the new URI
    let store = shared::open(&second).expect("reopen");
    assert_eq!(store.count().expect("count"), 1);
}
