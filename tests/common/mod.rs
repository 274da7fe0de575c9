//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{DateTime, Duration, Local};
use multi_notes::{Clock, FileDownload, MemoryStorage, NoteStore};
use std::cell::Cell;
use std::sync::{Arc, Mutex};

/// Clock that moves forward by one second every time it is read
pub struct ManualClock {
    next: Cell<DateTime<Local>>,
}

impl ManualClock {
    pub fn new() -> Self {
        let start = DateTime::from_timestamp(1_742_029_200, 0)
            .unwrap()
            .with_timezone(&Local);
        Self {
            next: Cell::new(start),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        let now = self.next.get();
        self.next.set(now + Duration::seconds(1));
        now
    }
}

/// One recorded call to `FileDownload::download`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: String,
    pub contents: String,
}

/// Download port that records every download; clones share the record
#[derive(Debug, Clone, Default)]
pub struct RecordingDownload {
    downloads: Arc<Mutex<Vec<Download>>>,
}

impl RecordingDownload {
    pub fn downloads(&self) -> Vec<Download> {
        self.downloads.lock().unwrap().clone()
    }
}

impl FileDownload for RecordingDownload {
    fn download(&self, filename: &str, mime: &str, contents: &str) {
        self.downloads.lock().unwrap().push(Download {
            filename: filename.to_string(),
            mime: mime.to_string(),
            contents: contents.to_string(),
        });
    }
}

/// Open a store over `storage` with a manual clock and a recording download port
pub fn open_store(storage: &MemoryStorage) -> (NoteStore, RecordingDownload) {
    let downloads = RecordingDownload::default();
    let store = NoteStore::open(Box::new(storage.clone()), Box::new(downloads.clone()))
        .unwrap()
        .with_clock(Box::new(ManualClock::new()));
    (store, downloads)
}

/// Open a store over fresh in-memory storage
pub fn new_store() -> (NoteStore, RecordingDownload) {
    open_store(&MemoryStorage::new())
}

/// Wait slightly longer than the creation cooldown
pub async fn wait_for_cooldown() {
    tokio::time::sleep(multi_notes::CREATION_COOLDOWN + std::time::Duration::from_millis(1)).await;
}

/// Add a note and wait out the cooldown, returning the new note's id
pub async fn add_and_wait(store: &mut NoteStore) -> String {
    let id = store.add_note().expect("creation should not be blocked");
    wait_for_cooldown().await;
    id
}

/// Titles of all notes in order
pub fn titles(store: &NoteStore) -> Vec<String> {
    store.notes().iter().map(|n| n.title.clone()).collect()
}
