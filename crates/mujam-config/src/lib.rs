use serde::{Deserialize, Serialize};

use self::export::ExportConfig;
use self::storage::StorageConfig;

pub mod export;
pub mod storage;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Read configuration from the process environment, falling back to the
    /// defaults of the original deployment (files in the working directory).
    pub fn new() -> Self {
        Config {
            storage: StorageConfig::new(),
            export: ExportConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
