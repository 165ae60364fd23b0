use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wordbook_types::{DEFAULT_CATEGORY, Dictionary, Entry, RECENTLY_VIEWED_LIMIT};

use crate::backend::KeyValueStore;
use crate::defaults::default_dictionary;
use crate::error::StoreError;

pub const DICTIONARY_KEY: &str = "dictionary:v1";
pub const RECENTLY_VIEWED_KEY: &str = "recentlyViewed";

/// Best-effort persistence of the dictionary and the recently viewed list.
///
/// Nothing here fails the caller: read errors degrade to defaults and
/// write errors are logged, leaving the previous persisted state in place.
pub struct PersistentStore {
    backend: Box<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Defaults with any persisted entries laid over them.
    ///
    /// Entries are converted one by one, so a single unreadable value is
    /// skipped instead of discarding the whole persisted dictionary.
    pub fn load_dictionary(&self) -> Dictionary {
        let mut dictionary = default_dictionary();

        match self.read_json::<BTreeMap<String, Value>>(DICTIONARY_KEY) {
            Ok(Some(persisted)) => {
                tracing::debug!("Loaded {} persisted entries", persisted.len());
                for (word, value) in persisted {
                    match entry_from_value(value) {
                        Ok(entry) => {
                            dictionary.insert(word, entry);
                        }
                        Err(e) => tracing::warn!("Skipping unreadable entry '{word}': {e}"),
                    }
                }
            }
            Ok(None) => tracing::info!("No persisted dictionary, using defaults"),
            Err(e) => tracing::error!("load error: {e}"),
        }

        dictionary
    }

    pub fn save_dictionary(&self, dictionary: &Dictionary) {
        if let Err(e) = self.write_json(DICTIONARY_KEY, dictionary) {
            tracing::error!("save error: {e}");
        }
    }

    pub fn load_recently_viewed(&self) -> Vec<String> {
        match self.read_json::<Vec<String>>(RECENTLY_VIEWED_KEY) {
            Ok(Some(mut words)) => {
                words.truncate(RECENTLY_VIEWED_LIMIT);
                words
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!("recently viewed load error: {e}");
                Vec::new()
            }
        }
    }

    pub fn save_recently_viewed(&self, words: &[String]) {
        if let Err(e) = self.write_json(RECENTLY_VIEWED_KEY, words) {
            tracing::error!("recently viewed save error: {e}");
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, &raw)
    }
}

/// A plain string is an older entry holding only its definition
fn entry_from_value(value: Value) -> Result<Entry, serde_json::Error> {
    match value {
        Value::String(definition) => Ok(Entry::new(definition, "", DEFAULT_CATEGORY)),
        other => serde_json::from_value(other),
    }
}
