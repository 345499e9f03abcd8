//! `KeyValueStore` adapters.

pub mod file;
pub mod memory;

use std::sync::Arc;

use sms_core::config::{SessionConfig, StorageBackend};
use sms_core::result::AppResult;
use sms_core::traits::KeyValueStore;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Open the storage backend selected by configuration.
pub fn open_storage(config: &SessionConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    let storage: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::open(&config.path)?),
    };
    tracing::debug!(backend = %config.backend, "Session storage opened");
    Ok(storage)
}
