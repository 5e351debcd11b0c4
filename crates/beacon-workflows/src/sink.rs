//! Sinks for simulated external side effects.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::info;

/// External collaborator a listener reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Outgoing email.
    Email,
    /// Team chat message.
    Chat,
    /// Spell checker.
    SpellCheck,
    /// Cloud document backup.
    CloudBackup,
}

impl Channel {
    /// Stable name of the channel.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Chat => "chat",
            Self::SpellCheck => "spell_check",
            Self::CloudBackup => "cloud_backup",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for listener side effects.
///
/// Implementations stand in for real integrations and must not fail.
pub trait NotifySink: Send + Sync {
    /// Deliver one message on `channel`.
    fn deliver(&self, channel: Channel, message: &str);
}

/// Sink that reports each delivery as an `info` tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotifySink for TracingSink {
    fn deliver(&self, channel: Channel, message: &str) {
        info!(channel = channel.as_str(), "{message}");
    }
}

/// One message captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Channel the message was sent on.
    pub channel: Channel,
    /// Message text.
    pub message: String,
}

/// Sink that keeps every delivery in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: Mutex<Vec<Delivery>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all deliveries so far.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.lock().clone()
    }

    /// Messages delivered on `channel`, in arrival order.
    #[must_use]
    pub fn messages_on(&self, channel: Channel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|d| d.channel == channel)
            .map(|d| d.message.clone())
            .collect()
    }

    /// Number of deliveries so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget all deliveries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Delivery>> {
        // A listener that panicked mid-push cannot leave the Vec inconsistent.
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotifySink for MemorySink {
    fn deliver(&self, channel: Channel, message: &str) {
        self.lock().push(Delivery {
            channel,
            message: message.to_owned(),
        });
    }
}
