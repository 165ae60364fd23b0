use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_debounce_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Quiet period before a search shell query runs
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let debounce_ms = env_parse("SEARCH_DEBOUNCE_MS").unwrap_or_else(default_debounce_ms);

        Self { debounce_ms }
    }
}
