//! Shell command handlers
//!
//! This module contains the implementation of all shell command handlers.
//! Each handler is in a separate file and returns the text to print.

pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod open;

/// Message shown by handlers that need an open note
pub(crate) const NO_ACTIVE_NOTE: &str = "No note is open. Use `list` and `open <n>` to pick one.";
