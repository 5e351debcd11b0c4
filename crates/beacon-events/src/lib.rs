//! Beacon Events - Listener registry and synchronous dispatch.
//!
//! This crate provides:
//! - The [`EventKind`] trait implemented by each workflow's closed set of kinds
//! - The [`Listener`] trait and a closure adaptor, [`FnListener`]
//! - The [`Dispatcher`], mapping each kind to the set of listeners subscribed to it
//! - A broadcast tap that reports every completed notification
//!
//! # Architecture
//!
//! A publisher owns a `Dispatcher`. After mutating its entity it calls
//! `dispatcher.notify(kind, &entity)`, which looks up the listeners
//! registered under `kind` and calls each of them in the current thread
//! before returning. Listener identity is the shared instance itself, so
//! subscribing the same `Arc` twice under one kind keeps a single entry.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use beacon_events::{Dispatcher, EventKind, FnListener, Listener};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Kind {
//!     Saved,
//! }
//!
//! impl EventKind for Kind {
//!     fn as_str(&self) -> &'static str {
//!         "saved"
//!     }
//! }
//!
//! let mut dispatcher: Dispatcher<Kind, String> = Dispatcher::new();
//! let printer: Arc<dyn Listener<String>> =
//!     Arc::new(FnListener::new("printer", |name: &String| println!("saved {name}")));
//!
//! assert!(dispatcher.subscribe(Kind::Saved, Arc::clone(&printer)));
//! assert!(!dispatcher.subscribe(Kind::Saved, Arc::clone(&printer)));
//! assert_eq!(dispatcher.notify(Kind::Saved, &"notes.txt".to_string()), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod dispatcher;
mod kind;
mod listener;
mod notification;

pub use dispatcher::{DEFAULT_TAP_CAPACITY, Dispatcher};
pub use kind::EventKind;
pub use listener::{FnListener, Listener, ListenerId};
pub use notification::{Notification, NotificationMetadata, NotificationReceiver};
