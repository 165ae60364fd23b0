pub mod backend;
pub mod defaults;
pub mod error;
pub mod persistent;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use defaults::default_dictionary;
pub use error::StoreError;
pub use persistent::{DICTIONARY_KEY, PersistentStore, RECENTLY_VIEWED_KEY};
