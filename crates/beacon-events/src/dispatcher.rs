//! Kind-keyed listener registry with synchronous notification.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

use crate::kind::EventKind;
use crate::listener::{Listener, ListenerId};
use crate::notification::{Notification, NotificationMetadata, NotificationReceiver};

/// Default channel capacity for the notification tap.
pub const DEFAULT_TAP_CAPACITY: usize = 256;

/// Registry mapping each event kind to the set of listeners subscribed to it.
///
/// The set under each kind is unordered and keyed by [`ListenerId`], so a
/// listener instance appears at most once per kind. A kind whose last
/// listener is removed is dropped from the registry entirely.
///
/// All notification happens in the caller's thread: [`Dispatcher::notify`]
/// does not return until every current listener of the kind has run.
pub struct Dispatcher<K: EventKind, P: ?Sized> {
    /// Listener sets per kind.
    listeners: HashMap<K, HashMap<ListenerId, Arc<dyn Listener<P>>>>,
    /// Name recorded in notification metadata.
    source: String,
    /// Sender for notification records.
    tap: broadcast::Sender<Arc<Notification<K>>>,
}

impl<K: EventKind, P: ?Sized> Dispatcher<K, P> {
    /// Create an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source("dispatcher")
    }

    /// Create an empty dispatcher whose notification records carry `source`.
    #[must_use]
    pub fn with_source(source: impl Into<String>) -> Self {
        Self::with_tap_capacity(source, DEFAULT_TAP_CAPACITY)
    }

    /// Create an empty dispatcher with a specific tap capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_tap_capacity(source: impl Into<String>, capacity: usize) -> Self {
        let (tap, _) = broadcast::channel(capacity.max(1));
        Self {
            listeners: HashMap::new(),
            source: source.into(),
            tap,
        }
    }

    /// Subscribe `listener` to `kind`.
    ///
    /// Returns `false` without changing anything if this listener instance
    /// is already subscribed to `kind`.
    pub fn subscribe(&mut self, kind: K, listener: Arc<dyn Listener<P>>) -> bool {
        let id = ListenerId::of(&listener);
        let set = self.listeners.entry(kind).or_default();
        if set.contains_key(&id) {
            trace!(
                kind = kind.as_str(),
                listener_name = %listener.name(),
                "Listener already subscribed"
            );
            return false;
        }

        debug!(
            kind = kind.as_str(),
            listener_name = %listener.name(),
            "Listener subscribed"
        );
        set.insert(id, listener);
        true
    }

    /// Unsubscribe `listener` from `kind`.
    ///
    /// Returns `true` if the listener was found and removed. Removing a
    /// listener that was never subscribed, or from a kind with no
    /// subscribers, does nothing.
    pub fn unsubscribe<L>(&mut self, kind: K, listener: &Arc<L>) -> bool
    where
        L: Listener<P> + ?Sized,
    {
        self.unsubscribe_id(kind, ListenerId::of(listener))
    }

    /// Unsubscribe the listener with the given identity from `kind`.
    pub fn unsubscribe_id(&mut self, kind: K, id: ListenerId) -> bool {
        let Some(set) = self.listeners.get_mut(&kind) else {
            return false;
        };

        let removed = set.remove(&id);
        if set.is_empty() {
            self.listeners.remove(&kind);
        }

        match removed {
            Some(listener) => {
                debug!(
                    kind = kind.as_str(),
                    listener_name = %listener.name(),
                    "Listener unsubscribed"
                );
                true
            },
            None => false,
        }
    }

    /// Notify every listener subscribed to `kind`.
    ///
    /// Each listener runs exactly once, in unspecified order. A panicking
    /// listener is caught and logged; the remaining listeners still run.
    ///
    /// Returns the number of listeners whose reaction completed. A kind with
    /// no subscribers yields zero.
    pub fn notify(&self, kind: K, payload: &P) -> usize {
        let mut delivered: usize = 0;

        if let Some(set) = self.listeners.get(&kind) {
            for (id, listener) in set {
                trace!(
                    kind = kind.as_str(),
                    listener_name = %listener.name(),
                    "Notifying listener"
                );

                let result = panic::catch_unwind(AssertUnwindSafe(|| listener.on_event(payload)));

                match result {
                    Ok(()) => delivered = delivered.saturating_add(1),
                    Err(e) => warn!(
                        listener_id = ?id,
                        listener_name = %listener.name(),
                        kind = kind.as_str(),
                        error = panic_message(e.as_ref()),
                        "Listener panicked"
                    ),
                }
            }
        } else {
            trace!(kind = kind.as_str(), "No listeners for kind");
        }

        self.record(kind, delivered);
        delivered
    }

    /// Open a receiver for notification records.
    ///
    /// Only records produced after this call are received.
    #[must_use]
    pub fn tap(&self) -> NotificationReceiver<K> {
        NotificationReceiver::new(self.tap.subscribe())
    }

    /// Check whether this listener instance is subscribed to `kind`.
    #[must_use]
    pub fn is_subscribed<L>(&self, kind: K, listener: &Arc<L>) -> bool
    where
        L: Listener<P> + ?Sized,
    {
        self.listeners
            .get(&kind)
            .is_some_and(|set| set.contains_key(&ListenerId::of(listener)))
    }

    /// Number of listeners subscribed to `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: K) -> usize {
        self.listeners.get(&kind).map_or(0, HashMap::len)
    }

    /// Kinds that currently have at least one listener, in unspecified order.
    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.listeners.keys().copied()
    }

    /// Total number of subscriptions across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.values().map(HashMap::len).sum()
    }

    /// Check if no listener is subscribed to any kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Remove every subscription.
    pub fn clear(&mut self) {
        self.listeners.clear();
        debug!(source = %self.source, "All listeners cleared");
    }

    /// Name recorded in notification metadata.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn record(&self, kind: K, delivered: usize) {
        if self.tap.receiver_count() == 0 {
            return;
        }

        let record = Notification {
            metadata: NotificationMetadata::new(self.source.clone()),
            kind,
            delivered,
        };
        // A receiver may drop between the count check and the send.
        let _ = self.tap.send(Arc::new(record));
    }
}

impl<K: EventKind, P: ?Sized> Default for Dispatcher<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EventKind, P: ?Sized> fmt::Debug for Dispatcher<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&'static str, usize> = self
            .listeners
            .iter()
            .map(|(kind, set)| (kind.as_str(), set.len()))
            .collect();
        f.debug_struct("Dispatcher")
            .field("source", &self.source)
            .field("listeners", &counts)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
