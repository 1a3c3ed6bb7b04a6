#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworklogger::models::RawRecord;
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated HOME so the user's config and secrets never leak into tests.
fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("rworklogger_test_home");
    fs::create_dir_all(&path).ok();
    path
}

pub fn rwl() -> Command {
    let home = test_home();
    let mut cmd = cargo_bin_cmd!("rworklogger");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env("NO_COLOR", "1")
        .env_remove("RWORKLOGGER_STORE_URI")
        .env_remove("RWORKLOGGER_LLM_TOKEN")
        .current_dir(&home);
    cmd
}

/// Create a unique store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklogger.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store and add a small dataset through the CLI
pub fn init_store_with_data(store: &str) {
    rwl()
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();

    for (person, task, ty, time, prod, date) in [
        ("John", "Coding", "Coding", "60", "productive", "2024-01-03"),
        ("Anna", "Meeting", "Meeting", "30", "unproductive", "2024-01-05"),
        ("Tom", "Email", "Email", "15", "productive", "2024-01-01"),
    ] {
        rwl()
            .args([
                "--store",
                store,
                "add",
                "--person",
                person,
                "--task",
                task,
                "--type",
                ty,
                "--time",
                time,
                "--productivity",
                prod,
                "--date",
                date,
            ])
            .assert()
            .success();
    }
}

pub fn doc(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

/// Canonical-schema document.
pub fn canonical(person: &str, task: &str, ty: &str, time: i64, prod: &str, date: &str) -> RawRecord {
    doc(json!({
        "person": person,
        "task": task,
        "task_type": ty,
        "time": time,
        "productivity": prod,
        "date": date,
    }))
}

/// Alternate (Polish) schema document.
pub fn alternate(person: &str, task: &str, ty: &str, time: i64, prod: &str, date: &str) -> RawRecord {
    doc(json!({
        "osoba": person,
        "zadanie": task,
        "typ_zadania": ty,
        "czas": time,
        "produktywnosc": prod,
        "data": date,
    }))
}

/// John/Anna/Tom fixture used by the context tests.
pub fn three_entries() -> Vec<RawRecord> {
    vec![
        canonical("John", "Coding", "Coding", 60, "productive", "2024-01-03"),
        canonical("Anna", "Meeting", "Meeting", 30, "unproductive", "2024-01-05"),
        canonical("Tom", "Email", "Email", 15, "productive", "2024-01-01"),
    ]
}
