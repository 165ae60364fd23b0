use wordbook_types::{Entry, RandomWord};

use crate::LookupService;

/// Lookup service used when network lookups are disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLookup;

#[async_trait::async_trait]
impl LookupService for OfflineLookup {
    async fn fetch_definition(&self, word: &str) -> Entry {
        tracing::debug!("Lookups disabled, no definition for '{word}'");
        Entry::fallback()
    }

    async fn fetch_random_word(&self) -> RandomWord {
        RandomWord::fallback()
    }
}
