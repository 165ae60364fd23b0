use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "./wordbook-data".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted dictionary and history
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = std::env::var("WORDBOOK_DATA_DIR").unwrap_or_else(|_| default_data_dir());

        Self { data_dir }
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
