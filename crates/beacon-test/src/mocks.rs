//! Recording listeners and sinks for testing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use beacon_events::Listener;
use beacon_workflows::{Channel, Delivery, NotifySink};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Listener that keeps a copy of every payload it receives.
#[derive(Debug)]
pub struct RecordingListener<P> {
    name: String,
    received: Mutex<Vec<P>>,
}

impl<P: Clone> RecordingListener<P> {
    /// Create a recorder with the given listener name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Number of notifications received.
    #[must_use]
    pub fn count(&self) -> usize {
        lock(&self.received).len()
    }

    /// Copies of every payload received, in order.
    #[must_use]
    pub fn received(&self) -> Vec<P> {
        lock(&self.received).clone()
    }

    /// The most recent payload, if any.
    #[must_use]
    pub fn last(&self) -> Option<P> {
        lock(&self.received).last().cloned()
    }

    /// Forget everything received so far.
    pub fn clear(&self) {
        lock(&self.received).clear();
    }
}

impl<P: Clone + Send> Listener<P> for RecordingListener<P> {
    fn on_event(&self, payload: &P) {
        lock(&self.received).push(payload.clone());
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Cloneable sink whose clones share one delivery log.
///
/// Hand one clone to a publisher and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a clone of this sink for handing to a publisher.
    #[must_use]
    pub fn shared(&self) -> Arc<dyn NotifySink> {
        Arc::new(self.clone())
    }

    /// Snapshot of all deliveries so far.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        lock(&self.deliveries).clone()
    }

    /// Number of deliveries on `channel`.
    #[must_use]
    pub fn count_on(&self, channel: Channel) -> usize {
        lock(&self.deliveries)
            .iter()
            .filter(|d| d.channel == channel)
            .count()
    }

    /// Check whether any delivery matches `channel` and `message` exactly.
    #[must_use]
    pub fn contains(&self, channel: Channel, message: &str) -> bool {
        lock(&self.deliveries)
            .iter()
            .any(|d| d.channel == channel && d.message == message)
    }

    /// Total number of deliveries.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.deliveries).len()
    }

    /// Check if nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.deliveries).is_empty()
    }
}

impl NotifySink for RecordingSink {
    fn deliver(&self, channel: Channel, message: &str) {
        lock(&self.deliveries).push(Delivery {
            channel,
            message: message.to_owned(),
        });
    }
}
