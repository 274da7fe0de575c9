//! Placeholder title numbering
//!
//! New notes are titled `Untitled N` where N is the smallest positive integer
//! not already taken by a title of the exact form `Untitled <integer>`
//! (matched case-insensitively, so `untitled 2` takes 2 as well).

use super::note::Note;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static UNTITLED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^untitled ([0-9]+)$").expect("valid untitled regex"));

/// Extract the number from a title of the form `Untitled <integer>`
pub fn untitled_number(title: &str) -> Option<u64> {
    let captures = UNTITLED_RE.captures(title)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Smallest positive number not used as an `Untitled` suffix by any note
pub fn next_untitled_number<'a>(notes: impl IntoIterator<Item = &'a Note>) -> u64 {
    let used: HashSet<u64> = notes
        .into_iter()
        .filter_map(|note| untitled_number(&note.title))
        .collect();

    let mut next = 1;
    while used.contains(&next) {
        next += 1;
    }
    next
}

/// Next free `Untitled N` title for the given notes
pub fn untitled_title<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    format!("Untitled {}", next_untitled_number(notes))
}
