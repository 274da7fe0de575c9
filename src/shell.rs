//! Terminal shell over a `NoteStore`
//!
//! Each input line is parsed with clap into one command and dispatched to a
//! handler in `handlers`. Handlers return the text to print; the shell keeps
//! the view-only state (the pending delete confirmation).

use crate::NoteStore;
use clap::{Parser, Subcommand};

/// Result of executing one shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    /// Print the text and keep reading
    Continue(String),
    /// Leave the shell
    Quit,
}

#[derive(Parser, Debug)]
#[command(name = "multi-notes", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Shell commands
///
/// Only the command word goes through clap. Whatever follows it on the line
/// is handed to the handler as typed.
#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Create a new untitled note and open it
    Add,
    /// List all notes; the open note is marked with `*`
    List,
    /// `open <n|id>`: open a note by its list position or id
    Open,
    /// Show the open note
    Show,
    /// `title <text>`: rename the open note; an empty title keeps the current one
    Title,
    /// `write <text>`: replace the open note's content (`\n` starts a new line)
    Write,
    /// `append <text>`: add a line to the open note's content
    Append,
    /// Delete the open note after confirmation
    Delete,
    /// Export the open note as a text file
    Export,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

pub struct NotesShell {
    pub(crate) store: NoteStore,
    pub(crate) pending_delete: bool,
}

impl NotesShell {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            pending_delete: false,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Whether the next line answers a delete confirmation
    pub fn is_confirming_delete(&self) -> bool {
        self.pending_delete
    }

    /// Execute one line of input
    pub fn execute(&mut self, line: &str) -> ShellOutcome {
        if self.pending_delete {
            self.pending_delete = false;
            return ShellOutcome::Continue(self.handle_confirm_delete(line.trim()));
        }

        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return ShellOutcome::Continue(String::new());
        }
        let (word, rest) = split_command(line);

        let parsed = match ShellLine::try_parse_from([word]) {
            Ok(parsed) => parsed,
            Err(e) => return ShellOutcome::Continue(e.render().to_string().trim_end().to_string()),
        };

        let output = match parsed.command {
            ShellCommand::Add => self.handle_add(),
            ShellCommand::List => self.handle_list(),
            ShellCommand::Open => self.handle_open(rest.trim()),
            ShellCommand::Show => self.handle_show(),
            ShellCommand::Title => self.handle_title(rest),
            ShellCommand::Write => self.handle_write(&unescape_newlines(rest)),
            ShellCommand::Append => self.handle_append(&unescape_newlines(rest)),
            ShellCommand::Delete => self.handle_delete(),
            ShellCommand::Export => self.handle_export(),
            ShellCommand::Quit => return ShellOutcome::Quit,
        };
        ShellOutcome::Continue(output)
    }
}

/// Split a line into its command word and the text after the first separator
fn split_command(line: &str) -> (&str, &str) {
    line.split_once(char::is_whitespace).unwrap_or((line, ""))
}

fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_newlines() {
        assert_eq!(unescape_newlines("milk\\neggs"), "milk\neggs");
        assert_eq!(unescape_newlines("plain"), "plain");
    }

    #[test]
    fn test_split_keeps_text_as_typed() {
        assert_eq!(split_command("write a    b\tc "), ("write", "a    b\tc "));
        assert_eq!(split_command("title  Two"), ("title", " Two"));
        assert_eq!(split_command("list"), ("list", ""));
    }

    #[test]
    fn test_parse_command_word() {
        let parsed = ShellLine::try_parse_from(["title"]).unwrap();
        assert!(matches!(parsed.command, ShellCommand::Title));
    }

    #[test]
    fn test_parse_exit_alias() {
        let parsed = ShellLine::try_parse_from(["exit"]).unwrap();
        assert!(matches!(parsed.command, ShellCommand::Quit));
    }

    #[test]
    fn test_parse_unknown_command_fails() {
        assert!(ShellLine::try_parse_from(["frobnicate"]).is_err());
    }
}
