//! Beacon Workflows - Publishers and listeners for accounts and documents.
//!
//! Each workflow pairs an entity with a publisher that owns a
//! [`Dispatcher`](beacon_events::Dispatcher):
//!
//! | Workflow  | Entity       | Publisher         | Kinds                        |
//! |-----------|--------------|-------------------|------------------------------|
//! | Accounts  | [`Account`]  | [`AccountClient`] | `register`, `upgrade`        |
//! | Documents | [`Document`] | [`WordProcessor`] | `create`, `update`, `close`  |
//!
//! The publisher performs the state transition first and then notifies the
//! listeners of the matching kind. Feature switches such as test mode or
//! spell checking only subscribe or unsubscribe listeners; the publisher's
//! control flow never branches on them.
//!
//! Listener side effects (emails, chat messages, backups) are stand-ins
//! routed through a [`NotifySink`]. The default [`TracingSink`] logs them.
//!
//! With the `config` feature, [`AccountSettings`] and [`DocumentSettings`]
//! convert from the matching `beacon-config` sections.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beacon_workflows::{AccountClient, Channel, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let client = AccountClient::new(sink.clone());
//!
//! let mut account = client.register_account("John Doe", "john.doe@foo.com");
//! client.upgrade_account(&mut account);
//!
//! assert_eq!(account.plan, 2);
//! assert_eq!(sink.messages_on(Channel::Email).len(), 2);
//! assert_eq!(sink.messages_on(Channel::Chat).len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod account;
mod document;
#[cfg(feature = "config")]
mod settings;
mod sink;

pub use account::{
    Account, AccountClient, AccountEvent, AccountListeners, AccountSettings,
    AccountingSlackListener, FREE_PLAN, PREMIUM_PLAN, ReceiptEmailListener,
    VerificationEmailListener,
};
pub use document::{
    BackupListener, Document, DocumentEvent, DocumentListeners, DocumentSettings,
    SpellCheckListener, WordProcessor,
};
pub use sink::{Channel, Delivery, MemorySink, NotifySink, TracingSink};
