use std::path::Path;
use std::{env, fs, io};

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod lookup;
pub mod storage;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub lookup: LookupConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Built-in defaults overridden by environment variables
    pub fn new() -> Self {
        Config {
            storage: StorageConfig::new(),
            lookup: LookupConfig::new(),
            ui: UiConfig::new(),
        }
    }

    /// Parse a (possibly partial) JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"lookup": {"timeout_seconds": 3}}"#).unwrap();
        assert_eq!(config.lookup.timeout_seconds, 3);
        assert!(config.lookup.enabled);
        assert_eq!(config.ui.debounce_ms, 500);
        assert_eq!(config.storage.data_dir, "./wordbook-data");
    }

    #[test]
    fn empty_json_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(
            config.lookup.definition_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
    }
}
