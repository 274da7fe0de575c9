//! Download port for exported notes

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fire-and-forget file download
pub trait FileDownload {
    /// Offer `contents` to the user as a file named `filename`
    fn download(&self, filename: &str, mime: &str, contents: &str);
}

/// Download port that writes files into an export directory
pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Write the file and return its path
    pub fn write(&self, filename: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;
        let path = self.dir.join(sanitize_filename(filename));
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

impl FileDownload for DirectoryDownload {
    fn download(&self, filename: &str, mime: &str, contents: &str) {
        match self.write(filename, contents) {
            Ok(path) => log::info!("Exported {} ({}) to {}", filename, mime, path.display()),
            Err(e) => log::warn!("Export of {} failed: {:#}", filename, e),
        }
    }
}

/// Make a suggested file name safe to create inside the export directory
///
/// Path separators and control characters become `_`. A name made only of
/// dots would address a directory, so it is replaced with `untitled.txt`.
pub fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if cleaned.trim_matches('.').trim().is_empty() {
        "untitled.txt".to_string()
    } else {
        cleaned
    }
}
