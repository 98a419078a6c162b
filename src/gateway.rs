//! The save/get/remove façade over an injected store backend.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::codec;
use crate::domain::{ActiveKey, StorageKey, StoredValue};
use crate::error::StorageResult;
use crate::notify::NotificationSink;
use crate::storage::StoreBackend;

/// Typed persistence gateway.
///
/// The gateway owns no state: every read goes straight to the store and
/// nothing is cached, so concurrent gateways over the same backend stay
/// coherent. Each successful mutation broadcasts exactly one change event
/// through the injected sink; failed mutations broadcast nothing.
pub struct StorageGateway {
    store: Arc<dyn StoreBackend>,
    sink: Arc<dyn NotificationSink>,
}

impl StorageGateway {
    /// Create a gateway over `store`, publishing change events to `sink`.
    #[must_use]
    pub fn new(store: Arc<dyn StoreBackend>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { store, sink }
    }

    /// Persist `value` under `key`, or remove the entry when the value is
    /// falsy.
    ///
    /// Falsy values (`false`, empty text, an empty map) are represented by
    /// absence: the entry is removed instead of written, so a later read
    /// cannot distinguish "explicitly falsy" from "never set". Only
    /// [`ActiveKey`] is accepted here; deprecated keys stay read-only by
    /// construction.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures such as
    /// [`StoreError::QuotaExceeded`](crate::error::StoreError::QuotaExceeded).
    /// Nothing is broadcast when the mutation fails.
    pub fn save(&self, key: ActiveKey, value: impl Into<StoredValue>) -> StorageResult<()> {
        let value = value.into();

        if value.is_falsy() {
            self.store.remove(key.as_str())?;
            debug!(key = %key, "Cleared entry for falsy value");
        } else {
            let raw = codec::encode(value)?;
            self.store.set(key.as_str(), &raw)?;
            debug!(key = %key, "Saved entry");
        }

        self.sink.notify();
        Ok(())
    }

    /// Read the value stored under `key`.
    ///
    /// Accepts both active and deprecated keys, so data written by earlier
    /// releases stays reachable. Absent entries yield `None`; entries that
    /// are not well-formed envelopes come back as raw text (see
    /// [`codec::decode`]). Backend read failures are logged and reported
    /// as absence: reads never surface errors.
    #[must_use]
    pub fn get(&self, key: impl Into<StorageKey>) -> Option<StoredValue> {
        let key = key.into();

        match self.store.get(key.as_str()) {
            Ok(Some(raw)) => Some(codec::decode(&raw)),
            Ok(None) => None,
            Err(error) => {
                warn!(key = %key, %error, "Store read failed, treating entry as absent");
                None
            }
        }
    }

    /// Remove the entries for `keys`, skipping keys with no entry.
    ///
    /// Deprecated keys are accepted so cleanup code can retire old data.
    /// One change event is broadcast after the whole batch succeeds, also
    /// when every key was already absent.
    ///
    /// # Errors
    ///
    /// Propagates the first backend failure. Keys removed before the
    /// failure stay removed; nothing is broadcast.
    pub fn remove<I, K>(&self, keys: I) -> StorageResult<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<StorageKey>,
    {
        for key in keys {
            let key = key.into();
            self.store.remove(key.as_str())?;
            debug!(key = %key, "Removed entry");
        }

        self.sink.notify();
        Ok(())
    }
}

impl fmt::Debug for StorageGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageGateway")
            .field("backend", &self.store.backend_name())
            .finish()
    }
}
