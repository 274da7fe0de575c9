//! Edit handlers for the notes shell

use super::NO_ACTIVE_NOTE;
use crate::NotesShell;
use crate::notes::NoteUpdate;

impl NotesShell {
    /// Runs one title edit session: focus, set the new value, commit.
    pub(crate) fn handle_title(&mut self, title: &str) -> String {
        if self.store.active_note().is_none() {
            return NO_ACTIVE_NOTE.to_string();
        }

        self.store.begin_title_edit();
        self.store.update_note(NoteUpdate::title(title));
        self.store.commit_title_edit();

        let current = self
            .store
            .active_note()
            .map(|n| n.title.clone())
            .unwrap_or_default();
        if title.trim().is_empty() {
            format!("Title can't be blank, kept '{}'", current)
        } else {
            format!("Renamed to '{}'", current)
        }
    }

    /// Replaces the open note's content.
    pub(crate) fn handle_write(&mut self, content: &str) -> String {
        if self.store.active_note().is_none() {
            return NO_ACTIVE_NOTE.to_string();
        }
        self.store.update_note(NoteUpdate::content(content));
        self.saved_message()
    }

    /// Adds a line at the end of the open note's content.
    pub(crate) fn handle_append(&mut self, line: &str) -> String {
        let Some(note) = self.store.active_note() else {
            return NO_ACTIVE_NOTE.to_string();
        };
        let content = if note.content.is_empty() {
            line.to_string()
        } else {
            format!("{}\n{}", note.content, line)
        };
        self.store.update_note(NoteUpdate::content(content));
        self.saved_message()
    }

    fn saved_message(&self) -> String {
        match self.store.active_note() {
            Some(note) => format!("Saved '{}' at {}", note.title, note.last_saved),
            None => NO_ACTIVE_NOTE.to_string(),
        }
    }
}
