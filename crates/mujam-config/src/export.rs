use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct ExportConfig {
    /// Append-only CSV mirror written on every successful insert
    pub backup_path: PathBuf,
    /// Optional bulk-import CSV read once at startup; missing file is a no-op
    pub import_path: PathBuf,
}

impl ExportConfig {
    pub fn new() -> Self {
        let backup_path = env::var("MUJAM_BACKUP_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("keywords_backup.csv"));

        let import_path = env::var("MUJAM_IMPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("keywords_import.csv"));

        ExportConfig {
            backup_path,
            import_path,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}
