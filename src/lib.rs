//! # PrefStore
//!
//! A thin persistence layer for client-side preferences:
//!
//! - **Closed key namespace**: every entry lives under a known key; retired
//!   keys stay readable but reject new writes at compile time
//! - **Envelope codec**: entries are stored as `{"value": ...}` JSON, and
//!   decoding tolerates legacy or corrupted entries instead of failing
//! - **Change notifications**: each successful mutation broadcasts one
//!   payload-less event so views can re-read what they depend on
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌────────────────┐
//! │   Embedder   │  →  │  StorageGateway  │  →  │  StoreBackend  │
//! │  (UI state)  │     │  save/get-remove │     │  memory / file │
//! └──────────────┘     └──────────────────┘     └────────────────┘
//!        ↑                      │
//!        └──────────────────────┘
//!          ChangeBus (payload-less change events)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//!
//! use prefstore::{ActiveKey, ChangeBus, MemoryStore, StorageGateway, StoredValue};
//!
//! let bus = Arc::new(ChangeBus::new());
//! let gateway = StorageGateway::new(Arc::new(MemoryStore::new()), bus);
//!
//! gateway.save(ActiveKey::Theme, "dark")?;
//! assert_eq!(gateway.get(ActiveKey::Theme), Some(StoredValue::from("dark")));
//!
//! // Falsy values are stored as absence.
//! gateway.save(ActiveKey::Autocomplete, false)?;
//! assert_eq!(gateway.get(ActiveKey::Autocomplete), None);
//! # Ok::<(), prefstore::StorageError>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod accordion;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod storage;

use std::sync::Arc;

pub use accordion::Accordion;
pub use config::{BackendKind, FileStoreConfig, MemoryStoreConfig, StoreConfig};
pub use domain::{ActiveKey, DeprecatedKey, StorageKey, StoredValue};
pub use error::{StorageError, StorageResult, StoreError, StoreResult};
pub use gateway::StorageGateway;
pub use notify::{ChangeBus, NotificationSink, NullSink, SubscriptionId};
pub use storage::{FileStore, MemoryStore, StoreBackend, create_store};

/// Build a gateway from configuration, wired to a fresh [`ChangeBus`].
///
/// This function:
/// 1. Creates the configured store backend
/// 2. Creates a change bus for this gateway
/// 3. Wires both into a [`StorageGateway`]
///
/// The bus is returned alongside the gateway so embedders can subscribe;
/// to share one bus across several gateways, wire them by hand with
/// [`StorageGateway::new`].
///
/// # Errors
///
/// Returns an error if the store backend fails to initialize.
pub fn open(config: &StoreConfig) -> StorageResult<(StorageGateway, Arc<ChangeBus>)> {
    let store = create_store(config)?;
    let bus = Arc::new(ChangeBus::new());
    let gateway = StorageGateway::new(store, Arc::clone(&bus) as Arc<dyn NotificationSink>);

    Ok((gateway, bus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_wires_gateway_and_bus() {
        let (gateway, bus) = open(&StoreConfig::default()).unwrap();

        let fired = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        bus.subscribe(move || {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });

        gateway.save(ActiveKey::Theme, "dark").unwrap();
        assert_eq!(fired.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(
            gateway.get(ActiveKey::Theme),
            Some(StoredValue::from("dark"))
        );
    }
}
