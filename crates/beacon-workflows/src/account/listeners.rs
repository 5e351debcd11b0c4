//! Side-effect listeners for account events.

use std::sync::Arc;

use beacon_events::Listener;

use super::model::Account;
use crate::sink::{Channel, NotifySink};

/// Emails a verification code to a newly registered account.
pub struct VerificationEmailListener {
    sink: Arc<dyn NotifySink>,
}

impl VerificationEmailListener {
    /// Create a listener reporting to `sink`.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self { sink }
    }
}

impl Listener<Account> for VerificationEmailListener {
    fn on_event(&self, account: &Account) {
        self.sink.deliver(
            Channel::Email,
            &format!("Emailing {} a verification code.", account.email),
        );
    }

    fn name(&self) -> &str {
        "verification_email"
    }
}

/// Emails a receipt to an account that upgraded.
pub struct ReceiptEmailListener {
    sink: Arc<dyn NotifySink>,
}

impl ReceiptEmailListener {
    /// Create a listener reporting to `sink`.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self { sink }
    }
}

impl Listener<Account> for ReceiptEmailListener {
    fn on_event(&self, account: &Account) {
        self.sink.deliver(
            Channel::Email,
            &format!("Emailing {} their receipt.", account.email),
        );
    }

    fn name(&self) -> &str {
        "receipt_email"
    }
}

/// Tells the accounting team about an upgrade.
pub struct AccountingSlackListener {
    sink: Arc<dyn NotifySink>,
}

impl AccountingSlackListener {
    /// Create a listener reporting to `sink`.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self { sink }
    }
}

impl Listener<Account> for AccountingSlackListener {
    fn on_event(&self, account: &Account) {
        self.sink.deliver(
            Channel::Chat,
            &format!(
                "Sending a Slack message to Accounting; {} upgraded their account.",
                account.email
            ),
        );
    }

    fn name(&self) -> &str {
        "accounting_slack"
    }
}
