//! Persistence port and its implementations
//!
//! The store saves two values under fixed keys: the note sequence as a JSON
//! array and the active note id as a bare string. `Persistence` is the
//! key/value port; `FileStorage` keeps one file per key in a data directory
//! and `MemoryStorage` keeps everything in a shared map.

use crate::notes::Note;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Key of the serialized note sequence
pub const NOTES_KEY: &str = "multi-notes";

/// Key of the active note id
pub const ACTIVE_NOTE_KEY: &str = "active-note-id";

/// String key/value persistence used by `NoteStore`
pub trait Persistence {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// State restored at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub notes: Vec<Note>,
    pub active_note_id: Option<String>,
}

/// Serialize notes to the JSON array format
pub fn encode_notes(notes: &[Note]) -> Result<String> {
    serde_json::to_string(notes).context("failed to serialize notes")
}

/// Parse notes from the JSON array format
pub fn decode_notes(value: &str) -> Result<Vec<Note>> {
    serde_json::from_str(value).context("saved notes are not a valid note array")
}

/// Read the saved notes and active id
///
/// Missing keys mean no saved state. Unreadable or malformed notes are
/// logged and treated as an empty list; the stored value is left untouched.
pub fn load_snapshot(storage: &dyn Persistence) -> Snapshot {
    let notes = match storage.load(NOTES_KEY) {
        Ok(Some(value)) => decode_notes(&value).unwrap_or_else(|e| {
            log::warn!("Ignoring saved notes under '{}': {:#}", NOTES_KEY, e);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Failed to read saved notes: {:#}", e);
            Vec::new()
        }
    };

    let active_note_id = match storage.load(ACTIVE_NOTE_KEY) {
        Ok(value) => value.filter(|id| !id.is_empty()),
        Err(e) => {
            log::warn!("Failed to read saved active note id: {:#}", e);
            None
        }
    };

    Snapshot {
        notes,
        active_note_id,
    }
}

/// File-backed persistence: one file per key inside a data directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the data directory; it is created on the first save
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Persistence for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let path = self.key_path(key);
        fs::write(&path, value).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
        }
    }
}

/// In-memory persistence; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Set a value directly, bypassing the store
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl Persistence for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
