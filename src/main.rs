//! Multi Notes - Main Entry Point
//!
//! Runs the interactive notes shell on stdin/stdout.
//! The actual implementation is in the `multi_notes` library.

use anyhow::Result;
use clap::Parser;
use multi_notes::config::DEFAULT_CONFIG_FILE;
use multi_notes::{Config, DirectoryDownload, FileStorage, NoteStore, NotesShell, ShellOutcome};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Multi Notes - keep short text notes with autosave and plain-text export
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding saved notes (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory exported notes are written to (overrides the config file)
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = args.export_dir {
        config.export_dir = dir;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let store = NoteStore::open(
        Box::new(FileStorage::new(&config.data_dir)),
        Box::new(DirectoryDownload::new(&config.export_dir)),
    )?;
    let mut shell = NotesShell::new(store);

    println!("Multi Notes. Type `help` for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", if shell.is_confirming_delete() { "[yes/no] " } else { "> " });
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match shell.execute(&line) {
            ShellOutcome::Continue(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            ShellOutcome::Quit => break,
        }
    }
    Ok(())
}
