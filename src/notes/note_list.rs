use super::note::Note;
use std::collections::HashSet;

/// Ordered note sequence with the active-note reference
///
/// Notes keep creation order. The active id, when set, always names a note
/// in the sequence: removing that note clears it.
#[derive(Debug, Clone, Default)]
pub struct NoteList {
    /// All notes in creation order
    notes: Vec<Note>,

    /// Index of ids for duplicate detection, kept in sync with `notes`
    ids: HashSet<String>,

    /// Id of the note currently open for editing
    active_id: Option<String>,
}

impl NoteList {
    /// Create an empty list with no active note
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from restored notes and a restored active id
    ///
    /// Notes whose id was already seen are skipped. An active id that does
    /// not name one of the notes is dropped.
    pub fn from_parts(notes: Vec<Note>, active_id: Option<String>) -> Self {
        let mut list = Self::new();
        for note in notes {
            list.push(note);
        }
        if let Some(id) = active_id {
            list.select(&id);
        }
        list
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Find a note by its id
    pub fn find_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The active note, if one is selected
    pub fn active(&self) -> Option<&Note> {
        let id = self.active_id.as_deref()?;
        self.find_by_id(id)
    }

    /// The active note as a mutable reference
    pub fn active_mut(&mut self) -> Option<&mut Note> {
        let id = self.active_id.as_deref()?;
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// Append a note at the end of the sequence
    ///
    /// # Returns
    /// `false` (and the note is not added) if a note with the same id exists
    pub fn push(&mut self, note: Note) -> bool {
        if !self.ids.insert(note.id.clone()) {
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Make the note with `id` the active note
    ///
    /// # Returns
    /// `true` if the note exists, `false` (active note unchanged) otherwise
    pub fn select(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active_id = Some(id.to_string());
        true
    }

    /// Remove the active note and clear the active id
    ///
    /// # Returns
    /// The removed note, or `None` if no note was active
    pub fn remove_active(&mut self) -> Option<Note> {
        let id = self.active_id.take()?;
        let pos = self.notes.iter().position(|n| n.id == id)?;
        self.ids.remove(&id);
        Some(self.notes.remove(pos))
    }
}
