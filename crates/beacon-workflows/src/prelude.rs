//! Prelude module - commonly used types for convenient import.
//!
//! Use `use beacon_workflows::prelude::*;` to import all essential types.

// Accounts
pub use crate::{Account, AccountClient, AccountEvent, AccountSettings};

// Documents
pub use crate::{Document, DocumentEvent, DocumentSettings, WordProcessor};

// Side-effect sinks
pub use crate::{Channel, MemorySink, NotifySink, TracingSink};
