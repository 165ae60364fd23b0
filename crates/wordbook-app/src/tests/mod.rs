mod cli_tests;
mod render_tests;

use std::sync::Arc;

use wordbook_core::DictionaryCore;
use wordbook_lookup::OfflineLookup;
use wordbook_store::{MemoryStore, PersistentStore};

fn offline_core() -> DictionaryCore {
    DictionaryCore::load(
        PersistentStore::new(MemoryStore::new()),
        Arc::new(OfflineLookup),
    )
}
