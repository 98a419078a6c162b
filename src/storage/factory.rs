//! Store backend factory.
//!
//! Creates the appropriate store backend based on configuration.

use std::sync::Arc;

use tracing::debug;

use crate::config::{BackendKind, StoreConfig};
use crate::error::StorageResult;
use crate::storage::file::FileStore;
use crate::storage::memory::MemoryStore;
use crate::storage::traits::StoreBackend;

/// Create a store backend based on configuration.
///
/// # Returns
///
/// An `Arc<dyn StoreBackend>` pointing to the configured backend.
///
/// # Errors
///
/// Returns an error if the backend cannot be initialized.
pub fn create_store(config: &StoreConfig) -> StorageResult<Arc<dyn StoreBackend>> {
    let store: Arc<dyn StoreBackend> = match config.backend {
        BackendKind::Memory => match config.memory.quota_bytes {
            Some(quota) => Arc::new(MemoryStore::with_quota(quota)),
            None => Arc::new(MemoryStore::new()),
        },
        BackendKind::File => Arc::new(FileStore::new(&config.file.data_dir)?),
    };

    debug!(backend = store.backend_name(), "Store backend ready");
    Ok(store)
}
