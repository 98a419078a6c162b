//! Store backend trait definition.
//!
//! The trait defines the interface for store backends, enabling swapping
//! between different implementations without changing the gateway.

use crate::error::StoreResult;

/// Raw key-value persistence operations.
///
/// Backends store opaque strings under opaque keys; typing, encoding, and
/// the key namespace all live above this seam. Implementations must be
/// safe to share across threads.
pub trait StoreBackend: Send + Sync {
    /// Read the raw entry stored under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no entry exists for `key`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove the entry stored under `key`.
    ///
    /// Idempotent: removing an absent key succeeds without effect.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Get the store backend name.
    fn backend_name(&self) -> &'static str;
}

/// Trait object alias for `StoreBackend`.
pub type DynStoreBackend = dyn StoreBackend;
