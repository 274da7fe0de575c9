//! Configuration file support
//!
//! Settings come from a TOML file. Every field has a default, so a missing
//! file or a partial file is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_FILE: &str = "multi-notes.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the saved notes and active note id
    pub data_dir: PathBuf,
    /// Directory exported notes are written to
    pub export_dir: PathBuf,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".multi-notes"),
            export_dir: PathBuf::from("."),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from `path`
    ///
    /// A missing file gives the defaults; a file that is not valid TOML for
    /// this structure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
