use std::collections::BTreeSet;
use std::sync::Arc;

use wordbook_lookup::LookupService;
use wordbook_store::PersistentStore;
use wordbook_types::{DEFAULT_CATEGORY, Dictionary, Entry, RandomWord};

use crate::error::CoreError;
use crate::normalize::normalize_word;
use crate::recent::RecentlyViewed;

/// In-memory dictionary and viewing history, persisted after every write.
///
/// This is the single source of truth for the presentation layer. It does
/// no locking of its own; callers serialize operations.
pub struct DictionaryCore {
    dictionary: Dictionary,
    recent: RecentlyViewed,
    store: PersistentStore,
    lookup: Arc<dyn LookupService>,
}

impl DictionaryCore {
    pub fn load(store: PersistentStore, lookup: Arc<dyn LookupService>) -> Self {
        let dictionary = store.load_dictionary();
        let recent = RecentlyViewed::from_words(store.load_recently_viewed());
        tracing::info!(
            "Dictionary ready: {} entries, {} recently viewed",
            dictionary.len(),
            recent.len()
        );

        Self {
            dictionary,
            recent,
            store,
            lookup,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.dictionary
            .get(word)
            .or_else(|| self.dictionary.get(&normalize_word(word)))
    }

    pub fn recently_viewed(&self) -> &[String] {
        self.recent.as_slice()
    }

    /// Distinct categories in use
    pub fn categories(&self) -> BTreeSet<&str> {
        self.dictionary
            .values()
            .map(|entry| entry.category.as_str())
            .collect()
    }

    /// Words containing `filter` (case-insensitive) in key order, optionally
    /// restricted to one category. Never touches the network.
    pub fn filter(&self, filter: &str, category: Option<&str>) -> Vec<(String, Entry)> {
        let needle = normalize_word(filter);

        self.dictionary
            .iter()
            .filter(|(word, _)| word.to_lowercase().contains(&needle))
            .filter(|(_, entry)| category.is_none_or(|c| entry.category == c))
            .map(|(word, entry)| (word.clone(), entry.clone()))
            .collect()
    }

    /// [`filter`](Self::filter), resolving a miss through the lookup service.
    ///
    /// A non-empty filter with no matches is fetched, stored (placeholder
    /// included) and returned alone, without reapplying `category`. A word
    /// that exists but is filtered out by `category` counts as a miss too,
    /// and its entry is replaced by the fetched one. The fetch is not
    /// cancellable: if the caller has moved on by the time it resolves, the
    /// result is still stored.
    pub async fn query(&mut self, filter: &str, category: Option<&str>) -> Vec<(String, Entry)> {
        let rows = self.filter(filter, category);
        let word = normalize_word(filter);

        if !rows.is_empty() || word.is_empty() {
            tracing::debug!("query '{filter}' matched {} words", rows.len());
            return rows;
        }

        tracing::debug!("'{word}' not in dictionary, fetching");
        let entry = self.lookup.fetch_definition(&word).await;

        self.dictionary.insert(word.clone(), entry.clone());
        self.store.save_dictionary(&self.dictionary);
        self.record_view(&word);

        vec![(word, entry)]
    }

    pub fn upsert(
        &mut self,
        word: &str,
        definition: &str,
        phonetics: &str,
        category: &str,
    ) -> Result<(), CoreError> {
        let word = normalize_word(word);
        let definition = definition.trim();

        if word.is_empty() {
            return Err(CoreError::Validation("word"));
        }
        if definition.is_empty() {
            return Err(CoreError::Validation("definition"));
        }

        let category = match category.trim() {
            "" => DEFAULT_CATEGORY,
            c => c,
        };

        self.dictionary.insert(
            word.clone(),
            Entry::new(definition, phonetics.trim(), category),
        );
        self.store.save_dictionary(&self.dictionary);
        self.record_view(&word);

        tracing::info!("Saved '{word}'");
        Ok(())
    }

    /// Add with empty phonetics and the default category
    pub fn add(&mut self, word: &str, definition: &str) -> Result<(), CoreError> {
        self.upsert(word, definition, "", DEFAULT_CATEGORY)
    }

    /// Delete `word` if present. Returns whether an entry was removed.
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self
            .dictionary
            .remove(word)
            .or_else(|| self.dictionary.remove(&normalize_word(word)))
            .is_some();

        self.store.save_dictionary(&self.dictionary);
        removed
    }

    /// Overwrite with every imported entry, then persist once
    pub fn merge(&mut self, imported: Dictionary) {
        let count = imported.len();
        self.dictionary.extend(imported);
        self.store.save_dictionary(&self.dictionary);
        tracing::info!("Merged {count} imported entries");
    }

    /// Look at an existing word, recording it as viewed. Returns the key
    /// that matched, which differs from `word` when an imported key kept
    /// its original casing or `word` needed normalizing.
    pub fn view(&mut self, word: &str) -> Option<(String, Entry)> {
        let key = if self.dictionary.contains_key(word) {
            word.to_string()
        } else {
            normalize_word(word)
        };

        let entry = self.dictionary.get(&key).cloned()?;
        self.record_view(&key);
        Some((key, entry))
    }

    pub async fn word_of_the_day(&self) -> RandomWord {
        self.lookup.fetch_random_word().await
    }

    fn record_view(&mut self, word: &str) {
        if self.recent.record(word) {
            self.store.save_recently_viewed(self.recent.as_slice());
        }
    }
}
