use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use wordbook_config::Config;
use wordbook_core::DictionaryCore;
use wordbook_lookup::{DictionaryApiClient, LookupService, OfflineLookup};
use wordbook_store::{FileStore, MemoryStore, PersistentStore};

pub struct AppState {
    pub config: Config,
    /// In-memory storage instead of the data directory
    pub ephemeral: bool,
}

impl AppState {
    pub fn new(config: Config, ephemeral: bool) -> Self {
        Self { config, ephemeral }
    }

    pub fn open_core(&self) -> anyhow::Result<DictionaryCore> {
        let store = if self.ephemeral {
            tracing::info!("Using in-memory storage");
            PersistentStore::new(MemoryStore::new())
        } else {
            let data_dir = self.config.storage.data_path();
            tracing::info!("Using data directory {}", data_dir.display());
            PersistentStore::new(FileStore::new(data_dir))
        };

        let lookup: Arc<dyn LookupService> = if self.config.lookup.enabled {
            Arc::new(
                DictionaryApiClient::new(&self.config.lookup)
                    .context("Failed to build lookup client")?,
            )
        } else {
            tracing::warn!("Lookups disabled, unknown words get placeholders");
            Arc::new(OfflineLookup)
        };

        Ok(DictionaryCore::load(store, lookup))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.config.ui.debounce_ms)
    }
}
