//! Add handler for the notes shell

use crate::NotesShell;
use crate::gate::CREATION_COOLDOWN;

impl NotesShell {
    /// Creates a note, or explains the cooldown when creation is blocked.
    pub(crate) fn handle_add(&mut self) -> String {
        if self.store.add_note().is_none() {
            return format!(
                "A note was just added. Wait {} seconds before adding another.",
                CREATION_COOLDOWN.as_secs()
            );
        }
        match self.store.active_note() {
            Some(note) => format!("Created '{}'", note.title),
            None => "Created a note".to_string(),
        }
    }
}
