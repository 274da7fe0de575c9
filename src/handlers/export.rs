//! Export handler for the notes shell

use super::NO_ACTIVE_NOTE;
use crate::NotesShell;

impl NotesShell {
    pub(crate) fn handle_export(&self) -> String {
        match self.store.export_active_note() {
            Some(exported) => format!("Exported {}", exported.filename),
            None => NO_ACTIVE_NOTE.to_string(),
        }
    }
}
