mod backup_tests;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wordbook_lookup::LookupService;
use wordbook_store::{MemoryStore, PersistentStore};
use wordbook_types::{Entry, RandomWord};

use crate::DictionaryCore;

/// Lookup service answering every word with the same entry
pub(crate) struct CountingLookup {
    entry: Entry,
    calls: AtomicUsize,
}

impl CountingLookup {
    pub(crate) fn new(entry: Entry) -> Arc<Self> {
        Arc::new(Self {
            entry,
            calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LookupService for CountingLookup {
    async fn fetch_definition(&self, _word: &str) -> Entry {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entry.clone()
    }

    async fn fetch_random_word(&self) -> RandomWord {
        RandomWord {
            word: "serendipity".to_string(),
            definition: self.entry.definition.clone(),
            phonetics: self.entry.phonetics.clone(),
        }
    }
}

/// Core over a fresh in-memory store; the store handle sees every write
pub(crate) fn fresh_core(lookup: Arc<CountingLookup>) -> (DictionaryCore, MemoryStore) {
    let backend = MemoryStore::new();
    let core = DictionaryCore::load(PersistentStore::new(backend.clone()), lookup);
    (core, backend)
}

pub(crate) fn fetched_entry() -> Entry {
    Entry::new("a fetched meaning", "/fɛtʃt/", "Daily Use")
}
