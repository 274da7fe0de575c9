//! Multi Notes Library
//!
//! This library keeps a flat list of short text notes for a single local user.
//! Notes are created with numbered placeholder titles, edited in place with
//! an autosave timestamp, exported as plain text, and persisted through a
//! key/value storage port after every change.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **View Layer**: `NotesShell` and `handlers` - a terminal shell that renders
//!   state and forwards user intents
//! - **Domain Layer**: `NoteStore` and the `notes` module - note state, its
//!   invariants and the creation cooldown
//! - **Persistence Layer**: `storage` and `download` modules - key/value storage
//!   and file export ports
//!
//! # Example
//!
//! ```no_run
//! use multi_notes::{DirectoryDownload, FileStorage, NoteStore, NoteUpdate};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut store = NoteStore::open(
//!         Box::new(FileStorage::new(".multi-notes")),
//!         Box::new(DirectoryDownload::new(".")),
//!     )?;
//!     store.add_note();
//!     store.update_note(NoteUpdate::content("milk\neggs"));
//!     store.export_active_note();
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod download;
pub mod formatting;
pub mod gate;
mod handlers;
pub mod notes;
mod shell;
pub mod storage;
pub mod validation;

use anyhow::Result;
use uuid::Uuid;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use download::{DirectoryDownload, FileDownload};
pub use gate::{CREATION_COOLDOWN, CreationGate, CreationState};
pub use notes::{EXPORT_MIME, ExportedNote, Note, NoteList, NoteUpdate};
pub use shell::{NotesShell, ShellOutcome};
pub use storage::{ACTIVE_NOTE_KEY, FileStorage, MemoryStorage, NOTES_KEY, Persistence};

/// Open title edit on one note
///
/// Started by a focus event and closed by a commit (blur) event.
#[derive(Debug, Clone)]
struct TitleEdit {
    note_id: String,
    previous_title: String,
}

/// Sole owner of note state
///
/// Every operation runs to completion and never fails: unmet preconditions
/// (no active note, creation cooldown) are silent no-ops and storage
/// failures are logged. The store persists the note sequence and the active
/// note id through its `Persistence` port after each change.
pub struct NoteStore {
    data: NoteList,
    storage: Box<dyn Persistence>,
    downloads: Box<dyn FileDownload>,
    clock: Box<dyn Clock>,
    gate: CreationGate,
    title_edit: Option<TitleEdit>,
}

impl NoteStore {
    /// Open a store and restore its saved state
    ///
    /// Malformed saved notes are treated as no saved state; restored notes
    /// are repaired (see `validation::repair_notes`) and a saved active id
    /// naming no restored note is dropped.
    ///
    /// # Errors
    /// Fails only outside a Tokio runtime, which the creation cooldown needs.
    pub fn open(storage: Box<dyn Persistence>, downloads: Box<dyn FileDownload>) -> Result<Self> {
        let gate = CreationGate::new(CREATION_COOLDOWN)?;
        let snapshot = storage::load_snapshot(storage.as_ref());
        let restored = snapshot.notes.len();
        let notes = validation::repair_notes(snapshot.notes);
        let data = NoteList::from_parts(notes, snapshot.active_note_id.clone());

        if let Some(id) = &snapshot.active_note_id
            && data.active_id().is_none()
        {
            log::warn!("Saved active note {} no longer exists", id);
        }
        log::info!(
            "Restored {} note(s) ({} saved), active: {}",
            data.len(),
            restored,
            data.active_id().unwrap_or("none")
        );

        Ok(Self {
            data,
            storage,
            downloads,
            clock: Box::new(SystemClock),
            gate,
            title_edit: None,
        })
    }

    /// Replace the clock used for `lastSaved` stamps
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn notes(&self) -> &[Note] {
        self.data.notes()
    }

    pub fn active_note_id(&self) -> Option<&str> {
        self.data.active_id()
    }

    pub fn active_note(&self) -> Option<&Note> {
        self.data.active()
    }

    pub fn creation_state(&self) -> CreationState {
        self.gate.state()
    }

    /// Whether `add_note` would create a note right now
    pub fn can_add_note(&self) -> bool {
        self.gate.is_open()
    }

    /// Whether a title edit session is open on the active note
    pub fn is_editing_title(&self) -> bool {
        self.title_edit.is_some()
    }

    fn timestamp(&self) -> String {
        clock::format_last_saved(&self.clock.now())
    }

    /// Create a new empty note and make it active
    ///
    /// The note is titled with the next free `Untitled N`. A successful call
    /// starts the creation cooldown; calls during the cooldown do nothing.
    ///
    /// # Returns
    /// The id of the new note, or `None` if creation was blocked
    pub fn add_note(&mut self) -> Option<String> {
        if !self.gate.is_open() {
            log::debug!("Add note ignored during creation cooldown");
            return None;
        }
        self.commit_title_edit();
        if !self.gate.try_enter() {
            return None;
        }

        let mut id = Uuid::new_v4().to_string();
        while self.data.contains(&id) {
            id = Uuid::new_v4().to_string();
        }
        let note = Note {
            id: id.clone(),
            title: notes::untitled_title(self.data.notes()),
            content: String::new(),
            last_saved: self.timestamp(),
        };
        log::debug!("Added note {} '{}'", note.id, note.title);

        self.data.push(note);
        self.data.select(&id);
        self.persist_notes();
        self.persist_active_id();
        Some(id)
    }

    /// Merge `fields` into the active note and refresh its `lastSaved`
    ///
    /// A blank title is accepted here; it is repaired when the title edit
    /// session commits. Does nothing without an active note.
    pub fn update_note(&mut self, fields: NoteUpdate) {
        let Some(note) = self.data.active_mut() else {
            return;
        };
        fields.apply_to(note);
        note.last_saved = clock::format_last_saved(&self.clock.now());
        log::debug!("Updated note {} '{}'", note.id, note.title);
        self.persist_notes();
    }

    /// Start a title edit session on the active note
    ///
    /// The current title is remembered as the restore target for a blank
    /// commit. A session already open on the active note is kept as it is;
    /// one open on another note is committed first.
    pub fn begin_title_edit(&mut self) {
        let Some(active_id) = self.data.active_id().map(str::to_string) else {
            return;
        };
        if let Some(edit) = &self.title_edit {
            if edit.note_id == active_id {
                return;
            }
            self.commit_title_edit();
        }
        if let Some(note) = self.data.active() {
            self.title_edit = Some(TitleEdit {
                note_id: note.id.clone(),
                previous_title: note.title.clone(),
            });
        }
    }

    /// Close the title edit session
    ///
    /// If the edited note's title is blank, it is restored to the title it
    /// had when the session began, or to a fresh `Untitled N` if that was
    /// blank too. Without an open session this only checks the active note.
    pub fn commit_title_edit(&mut self) {
        let edit = self.title_edit.take();
        let target = match &edit {
            Some(edit) => edit.note_id.clone(),
            None => match self.data.active_id() {
                Some(id) => id.to_string(),
                None => return,
            },
        };
        let Some(note) = self.data.find_by_id(&target) else {
            return;
        };
        if !note.has_blank_title() {
            return;
        }

        let restored = edit
            .map(|e| e.previous_title)
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| notes::untitled_title(self.data.notes()));

        if self.data.active_id() == Some(target.as_str()) {
            self.update_note(NoteUpdate::title(restored));
        }
    }

    /// Delete the active note and clear the active id
    ///
    /// Irreversible. Confirmation is the view's job; the store deletes
    /// unconditionally. Does nothing without an active note.
    pub fn delete_note(&mut self) {
        let Some(note) = self.data.remove_active() else {
            return;
        };
        if self
            .title_edit
            .as_ref()
            .is_some_and(|edit| edit.note_id == note.id)
        {
            self.title_edit = None;
        }
        log::debug!("Deleted note {} '{}'", note.id, note.title);

        self.persist_notes();
        self.persist_active_id();
    }

    /// Make the note with `id` active; unknown ids are ignored
    pub fn select_note(&mut self, id: &str) {
        if !self.data.contains(id) || self.data.active_id() == Some(id) {
            return;
        }
        self.commit_title_edit();
        self.data.select(id);
        self.persist_active_id();
    }

    /// Render the active note as plain text and hand it to the download port
    ///
    /// # Returns
    /// The exported note, or `None` if no note is active
    pub fn export_active_note(&self) -> Option<ExportedNote> {
        let exported = ExportedNote::from_note(self.data.active()?);
        self.downloads
            .download(&exported.filename, EXPORT_MIME, &exported.text);
        Some(exported)
    }

    /// Save the note sequence; an empty sequence removes the saved value
    fn persist_notes(&self) {
        let result = if self.data.is_empty() {
            self.storage.remove(NOTES_KEY)
        } else {
            storage::encode_notes(self.data.notes())
                .and_then(|value| self.storage.save(NOTES_KEY, &value))
        };
        if let Err(e) = result {
            log::warn!("Failed to save notes: {:#}", e);
        }
    }

    /// Save the active note id; a cleared id removes the saved value
    fn persist_active_id(&self) {
        let result = match self.data.active_id() {
            Some(id) => self.storage.save(ACTIVE_NOTE_KEY, id),
            None => self.storage.remove(ACTIVE_NOTE_KEY),
        };
        if let Err(e) = result {
            log::warn!("Failed to save active note id: {:#}", e);
        }
    }
}
