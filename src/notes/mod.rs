//! Note domain models
//!
//! This module contains the note data structures and the pure rules around them.
//! It is split into submodules:
//! - `note`: the `Note` record and partial updates
//! - `note_list`: ordered note sequence with the active-note reference
//! - `titles`: `Untitled N` placeholder numbering
//! - `export`: plain-text export rendering

mod export;
mod note;
mod note_list;
mod titles;

pub use export::{EXPORT_MIME, ExportedNote};
pub use note::{Note, NoteUpdate};
pub use note_list::NoteList;
pub use titles::{next_untitled_number, untitled_number, untitled_title};
