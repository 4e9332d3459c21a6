use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// SQLite database holding the keyword table
    pub db_path: PathBuf,
}

impl StorageConfig {
    pub fn new() -> Self {
        let db_path = env::var("MUJAM_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("keywords.db"));

        StorageConfig { db_path }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new()
    }
}
