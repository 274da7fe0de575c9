use super::note::Note;

/// MIME type of exported notes
pub const EXPORT_MIME: &str = "text/plain";

/// Plain-text rendering of a note, ready to hand to a download port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedNote {
    /// Suggested file name: `<title>.txt`, or `untitled.txt` for an empty title
    pub filename: String,
    /// `Title: <title>\n\n<content>`
    pub text: String,
}

impl ExportedNote {
    pub fn from_note(note: &Note) -> Self {
        let stem = if note.title.is_empty() {
            "untitled"
        } else {
            note.title.as_str()
        };
        Self {
            filename: format!("{}.txt", stem),
            text: format!("Title: {}\n\n{}", note.title, note.content),
        }
    }
}
