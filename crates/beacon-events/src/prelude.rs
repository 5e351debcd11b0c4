//! Prelude module - commonly used types for convenient import.
//!
//! Use `use beacon_events::prelude::*;` to import all essential types.

// Dispatch
pub use crate::{DEFAULT_TAP_CAPACITY, Dispatcher, EventKind};

// Listeners
pub use crate::{FnListener, Listener, ListenerId};

// Notification tap
pub use crate::{Notification, NotificationMetadata, NotificationReceiver};
