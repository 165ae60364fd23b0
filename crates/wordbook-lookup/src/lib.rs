mod client;
mod offline;

pub use client::DictionaryApiClient;
pub use offline::OfflineLookup;

use wordbook_types::{Entry, RandomWord};

/// Best-effort source of definitions.
///
/// Implementations never fail: any error is logged and replaced by
/// [`Entry::fallback`] / [`RandomWord::fallback`]. Calls are independent,
/// unordered and cannot be cancelled.
#[async_trait::async_trait]
pub trait LookupService: Send + Sync {
    /// Definition and phonetics for `word`; category is always the default
    async fn fetch_definition(&self, word: &str) -> Entry;

    /// A random word together with its definition
    async fn fetch_random_word(&self) -> RandomWord;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Response missing {0}")]
    MissingField(&'static str),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
