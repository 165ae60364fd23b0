use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_enabled() -> bool {
    true
}

fn default_definition_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_random_word_url() -> String {
    "https://random-word-api.herokuapp.com/word?number=1".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// When false no network requests are made and lookups yield placeholders
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base URL; the word is appended as the last path segment
    #[serde(default = "default_definition_url")]
    pub definition_url: String,
    #[serde(default = "default_random_word_url")]
    pub random_word_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            definition_url: default_definition_url(),
            random_word_url: default_random_word_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        let enabled = env_parse("LOOKUP_ENABLED").unwrap_or_else(default_enabled);

        let definition_url =
            std::env::var("LOOKUP_DEFINITION_URL").unwrap_or_else(|_| default_definition_url());

        let random_word_url =
            std::env::var("LOOKUP_RANDOM_WORD_URL").unwrap_or_else(|_| default_random_word_url());

        let timeout_seconds =
            env_parse("LOOKUP_TIMEOUT_SECONDS").unwrap_or_else(default_timeout_seconds);

        Self {
            enabled,
            definition_url,
            random_word_url,
            timeout_seconds,
        }
    }
}
