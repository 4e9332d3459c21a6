use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use mujam_core::Entry;

use crate::csv::{self, BOM, HEADER};
use crate::error::ExportError;

/// Append-only CSV mirror of the store, one row per successful insert.
///
/// The BOM and header row are written only when the file is first created,
/// so later appends never scatter them mid-file.
pub struct BackupWriter {
    path: PathBuf,
}

impl BackupWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &Entry) -> Result<(), ExportError> {
        let fresh = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if fresh {
            writeln!(file, "{BOM}{HEADER}")?;
        }
        file.write_all(csv::format_row(&entry.keyword, &entry.meaning, &entry.example).as_bytes())?;

        tracing::debug!(keyword = %entry.keyword, path = %self.path.display(), "mirrored entry to backup");
        Ok(())
    }
}
