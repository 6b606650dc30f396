#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rschoolcal::config::HOME_ENV;
use rschoolcal::models::{CalendarEvent, EventDraft};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Private config dir + event store for one test.
pub struct Sandbox {
    dir: TempDir,
    store: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::with_store("events.json")
    }

    pub fn with_store(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = dir.path().join(name);
        Self { dir, store }
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    pub fn store(&self) -> String {
        self.store.to_string_lossy().to_string()
    }

    /// Absolute path of a scratch file inside the sandbox
    pub fn file(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().to_string()
    }

    pub fn cal(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rschoolcal");
        cmd.env(HOME_ENV, self.dir.path())
            .env_remove("RUST_LOG")
            .args(["--store", self.store().as_str(), "--test"]);
        cmd
    }

    pub fn init(&self) {
        self.cal().arg("init").assert().success();
    }

    pub fn add(&self, title: &str, start: &str, end: &str) {
        self.cal()
            .args(["add", title, "--start", start, "--end", end])
            .assert()
            .success();
    }

    /// Events as persisted in the JSON store
    pub fn stored_events(&self) -> Vec<CalendarEvent> {
        let content = fs::read_to_string(&self.store).expect("read store");
        serde_json::from_str(&content).expect("parse store")
    }
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid timestamp")
}

pub fn draft(title: &str, start: &str, end: &str) -> EventDraft {
    EventDraft::new(title, dt(start), dt(end))
}

/// Fully built event with a fixed id, for tests that bypass the store.
pub fn event(id: &str, title: &str, start: &str, end: &str) -> CalendarEvent {
    draft(title, start, end).into_event(id.to_string())
}
