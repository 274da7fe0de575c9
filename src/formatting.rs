//! Formatting helper functions for the notes shell
//!
//! This module renders the sidebar list and the editor pane as plain text.

use crate::notes::Note;

/// Format the note list with 1-based positions, marking the active note
///
/// # Arguments
/// * `notes` - Notes in creation order
/// * `active_id` - Id of the active note, if any
///
/// # Returns
/// One line per note, or a hint when there are no notes
pub fn format_note_list(notes: &[Note], active_id: Option<&str>) -> String {
    if notes.is_empty() {
        return "No notes yet. Use `add` to create one.".to_string();
    }

    let mut result = format!("{} note(s):\n", notes.len());
    for (i, note) in notes.iter().enumerate() {
        let marker = if active_id == Some(note.id.as_str()) {
            '*'
        } else {
            ' '
        };
        result.push_str(&format!("{} {}. {}\n", marker, i + 1, note.title));
    }
    result
}

/// Format the editor pane for the active note
pub fn format_note(note: Option<&Note>) -> String {
    let Some(note) = note else {
        return "Select a note to start editing.".to_string();
    };

    let mut result = format!("# {}\n\n", note.title);
    if !note.content.is_empty() {
        result.push_str(&note.content);
        result.push_str("\n\n");
    }
    result.push_str(&format!("Last saved: {}", note.last_saved));
    result
}

/// Confirmation question shown before deleting a note
pub fn format_delete_prompt(note: &Note) -> String {
    format!(
        "Are you sure to delete this note ({})? This action can't be undone. Type `yes` to delete or anything else to cancel.",
        note.title
    )
}
