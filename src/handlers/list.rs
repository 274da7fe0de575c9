//! List and show handlers for the notes shell

use crate::NotesShell;
use crate::formatting;

impl NotesShell {
    pub(crate) fn handle_list(&self) -> String {
        formatting::format_note_list(self.store.notes(), self.store.active_note_id())
    }

    pub(crate) fn handle_show(&self) -> String {
        formatting::format_note(self.store.active_note())
    }
}
