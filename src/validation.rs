//! Validation helpers
//!
//! This module repairs restored data so it satisfies the store's invariants
//! and resolves note selectors typed in the shell.

use crate::notes::{Note, untitled_title};
use std::collections::HashSet;

/// Normalize line endings in a string to LF (\n)
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Repair notes restored from storage
///
/// - Notes repeating an earlier id are dropped (the first one wins).
/// - Blank titles get a fresh `Untitled N`, numbered against every other note.
/// - CR and CRLF line endings in content become LF.
///
/// Every repair is logged at `warn`.
pub fn repair_notes(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    let mut repaired: Vec<Note> = Vec::with_capacity(notes.len());

    for mut note in notes {
        if !seen.insert(note.id.clone()) {
            log::warn!("Dropping restored note '{}': duplicate id {}", note.title, note.id);
            continue;
        }
        if note.content.contains('\r') {
            note.content = normalize_line_endings(&note.content);
        }
        repaired.push(note);
    }

    for i in 0..repaired.len() {
        if repaired[i].has_blank_title() {
            let title = untitled_title(repaired.iter());
            log::warn!("Restored note {} had a blank title, renamed to '{}'", repaired[i].id, title);
            repaired[i].title = title;
        }
    }

    repaired
}

/// Resolve a shell selector to a note id
///
/// A number from 1 to the note count picks a note by its position in the
/// list; anything else is matched against note ids.
///
/// # Returns
/// The id of the selected note, or `None` if nothing matches
pub fn resolve_note_selector(notes: &[Note], selector: &str) -> Option<String> {
    let selector = selector.trim();
    if let Ok(position) = selector.parse::<usize>()
        && (1..=notes.len()).contains(&position)
    {
        return Some(notes[position - 1].id.clone());
    }
    notes
        .iter()
        .find(|n| n.id == selector)
        .map(|n| n.id.clone())
}
