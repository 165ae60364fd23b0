use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category given to entries that don't name one
pub const DEFAULT_CATEGORY: &str = "Daily Use";
/// Placeholder definition used when a lookup yields nothing
pub const FALLBACK_DEFINITION: &str = "Definition not available";
/// Placeholder word used when the random word source is unreachable
pub const FALLBACK_WORD: &str = "Word";
/// Maximum number of recently viewed words kept
pub const RECENTLY_VIEWED_LIMIT: usize = 10;
/// File name used when exporting the dictionary
pub const EXPORT_FILENAME: &str = "dictionary_backup.json";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A stored word: definition, phonetics and category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub definition: String,
    #[serde(default)]
    pub phonetics: String,
    #[serde(default = "default_category")]
    pub category: String,
}

impl Entry {
    pub fn new(
        definition: impl Into<String>,
        phonetics: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            definition: definition.into(),
            phonetics: phonetics.into(),
            category: category.into(),
        }
    }

    /// Entry returned when a definition could not be fetched
    pub fn fallback() -> Self {
        Self::new(FALLBACK_DEFINITION, "", DEFAULT_CATEGORY)
    }

    pub fn is_placeholder(&self) -> bool {
        self.definition == FALLBACK_DEFINITION
    }
}

/// Word -> entry mapping, iterated in key order
pub type Dictionary = BTreeMap<String, Entry>;

/// Word of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWord {
    pub word: String,
    pub definition: String,
    pub phonetics: String,
}

impl RandomWord {
    pub fn fallback() -> Self {
        Self {
            word: FALLBACK_WORD.to_string(),
            definition: FALLBACK_DEFINITION.to_string(),
            phonetics: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw text typed into the search shell
    SearchInput(String),
    ShowResults {
        filter: String,
        rows: Vec<(String, Entry)>,
    },
    Quit,
}
