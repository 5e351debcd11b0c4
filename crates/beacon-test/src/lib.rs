//! Beacon Test - Shared test utilities for Beacon workflows.
//!
//! This crate provides recording listeners, a shareable recording sink and
//! fixtures for use as a dev-dependency.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! beacon-test.workspace = true
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use beacon_events::Dispatcher;
//! use beacon_test::RecordingListener;
//! use beacon_workflows::{Account, AccountEvent};
//!
//! #[test]
//! fn test_register_is_observed() {
//!     let recorder = Arc::new(RecordingListener::<Account>::new("recorder"));
//!     let mut dispatcher: Dispatcher<AccountEvent, Account> = Dispatcher::new();
//!     dispatcher.subscribe(AccountEvent::Register, recorder.clone());
//!
//!     dispatcher.notify(AccountEvent::Register, &beacon_test::test_account());
//!     assert_eq!(recorder.count(), 1);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;
