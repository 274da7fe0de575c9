use serde::{Deserialize, Serialize};

/// A single user-authored note
///
/// Serialized with the field names `id`, `title`, `content` and `lastSaved`,
/// all as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier assigned at creation (UUID v4), never changed afterwards
    pub id: String,
    /// Human-readable title, defaults to an `Untitled N` placeholder
    pub title: String,
    /// Free-form text body
    #[serde(default)]
    pub content: String,
    /// Human-readable time of the most recent title or content mutation
    #[serde(default)]
    pub last_saved: String,
}

impl Note {
    /// Check whether the title is empty or whitespace only
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Partial update applied to the active note
///
/// `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    /// Update that only replaces the title
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    /// Update that only replaces the content
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// Merge the given fields into `note`
    pub(crate) fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
    }
}
