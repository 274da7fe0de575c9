//! Delete handlers for the notes shell
//!
//! `delete` only asks; the next input line answers. The store deletes
//! unconditionally, so the confirmation lives here.

use super::NO_ACTIVE_NOTE;
use crate::NotesShell;
use crate::formatting;

impl NotesShell {
    pub(crate) fn handle_delete(&mut self) -> String {
        let Some(note) = self.store.active_note() else {
            return NO_ACTIVE_NOTE.to_string();
        };
        let prompt = formatting::format_delete_prompt(note);
        self.pending_delete = true;
        prompt
    }

    pub(crate) fn handle_confirm_delete(&mut self, answer: &str) -> String {
        if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            return "Deletion cancelled".to_string();
        }
        let Some(title) = self.store.active_note().map(|n| n.title.clone()) else {
            return NO_ACTIVE_NOTE.to_string();
        };
        self.store.delete_note();
        format!("Deleted '{}'", title)
    }
}
