//! Notification records broadcast after each dispatch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::warn;
use uuid::Uuid;

use crate::kind::EventKind;

/// Metadata attached to every notification record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMetadata {
    /// Unique notification identifier.
    pub event_id: Uuid,
    /// When the dispatch finished.
    pub timestamp: DateTime<Utc>,
    /// Dispatcher that produced the record.
    pub source: String,
}

impl NotificationMetadata {
    /// Create new notification metadata.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source: source.into(),
        }
    }
}

/// Summary of one completed `notify` call.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "K: EventKind"))]
pub struct Notification<K> {
    /// Record metadata.
    pub metadata: NotificationMetadata,
    /// Kind that was notified.
    #[serde(serialize_with = "serialize_kind")]
    pub kind: K,
    /// Number of listeners whose reaction completed.
    pub delivered: usize,
}

impl<K: EventKind> Notification<K> {
    /// Stable name of the notified kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind.as_str()
    }
}

fn serialize_kind<K, S>(kind: &K, serializer: S) -> Result<S::Ok, S::Error>
where
    K: EventKind,
    S: serde::Serializer,
{
    serializer.serialize_str(kind.as_str())
}

/// Receiver for notification records from a dispatcher's tap.
#[derive(Debug)]
pub struct NotificationReceiver<K> {
    receiver: broadcast::Receiver<Arc<Notification<K>>>,
}

impl<K: EventKind> NotificationReceiver<K> {
    pub(crate) fn new(receiver: broadcast::Receiver<Arc<Notification<K>>>) -> Self {
        Self { receiver }
    }

    /// Receive the next notification record.
    ///
    /// Returns `None` once the dispatcher has been dropped. Records missed
    /// because this receiver fell behind are logged and skipped.
    pub async fn recv(&mut self) -> Option<Arc<Notification<K>>> {
        loop {
            match self.receiver.recv().await {
                Ok(record) => return Some(record),
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    warn!(skipped = count, "Notification receiver lagged, records dropped");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Try to receive the next record without waiting.
    ///
    /// Returns `None` if no record is available or the channel is closed.
    pub fn try_recv(&mut self) -> Option<Arc<Notification<K>>> {
        loop {
            match self.receiver.try_recv() {
                Ok(record) => return Some(record),
                Err(broadcast::error::TryRecvError::Lagged(count)) => {
                    warn!(skipped = count, "Notification receiver lagged, records dropped");
                },
                Err(
                    broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}
