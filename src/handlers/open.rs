//! Open handler for the notes shell

use crate::NotesShell;
use crate::formatting;
use crate::validation;

impl NotesShell {
    /// Selects a note by list position or id and shows it.
    pub(crate) fn handle_open(&mut self, selector: &str) -> String {
        if selector.is_empty() {
            return "Usage: open <n|id>".to_string();
        }
        let Some(id) = validation::resolve_note_selector(self.store.notes(), selector) else {
            return format!("No note matches '{}'. Use `list` to see your notes.", selector);
        };
        self.store.select_note(&id);
        formatting::format_note(self.store.active_note())
    }
}
