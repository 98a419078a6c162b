//! Process-wide change notification.
//!
//! Every successful mutation through the gateway broadcasts one
//! payload-less "stored state may have changed" event. Observers that want
//! the new state re-read it through the gateway; the event itself names no
//! key and carries no value.
//!
//! Delivery is synchronous and in-process only. There is no queue: an
//! observer registered after an event fired does not receive it.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Publish seam the gateway notifies through.
pub trait NotificationSink: Send + Sync {
    /// Broadcast that some stored value may have changed.
    fn notify(&self);
}

/// Sink that drops every notification.
///
/// For embedders that poll instead of subscribing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self) {}
}

/// Handle identifying one [`ChangeBus`] subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Arc<dyn Fn() + Send + Sync>;

/// In-process notification bus.
///
/// Observers run synchronously on the mutating thread, in subscription
/// order, against the subscriber set as it was when the broadcast started.
/// An observer may subscribe or unsubscribe from inside its callback.
#[derive(Default)]
pub struct ChangeBus {
    observers: RwLock<Vec<(SubscriptionId, Observer)>>,
    next_id: AtomicU64,
}

impl ChangeBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` for future change events.
    ///
    /// # Returns
    ///
    /// An id that cancels the subscription via [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, observer: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    /// Cancel a subscription.
    ///
    /// # Returns
    ///
    /// Whether the subscription was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        observers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.read().len()
    }
}

impl NotificationSink for ChangeBus {
    fn notify(&self) {
        // Snapshot under the read lock, invoke outside it, so observers can
        // touch the bus without deadlocking.
        let snapshot: Vec<Observer> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in snapshot {
            observer();
        }
    }
}

impl fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
