//! Account registration workflow.

mod client;
mod listeners;
mod model;

pub use client::{AccountClient, AccountListeners, AccountSettings};
pub use listeners::{AccountingSlackListener, ReceiptEmailListener, VerificationEmailListener};
pub use model::{Account, AccountEvent, FREE_PLAN, PREMIUM_PLAN};
