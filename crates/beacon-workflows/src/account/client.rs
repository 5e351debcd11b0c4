//! Account publisher.

use std::sync::Arc;

use beacon_events::{Dispatcher, Listener};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::listeners::{AccountingSlackListener, ReceiptEmailListener, VerificationEmailListener};
use super::model::{Account, AccountEvent, PREMIUM_PLAN};
use crate::sink::NotifySink;

/// Feature switches for an [`AccountClient`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// Suppress every account notification.
    pub test_mode: bool,
}

/// The standard listener instances of the account workflow.
///
/// These handles are the identities used to subscribe and unsubscribe, so
/// they can also be used to drive the client's dispatcher directly.
#[derive(Clone)]
pub struct AccountListeners {
    /// Subscribed to [`AccountEvent::Register`].
    pub verification: Arc<VerificationEmailListener>,
    /// Subscribed to [`AccountEvent::Upgrade`].
    pub receipt: Arc<ReceiptEmailListener>,
    /// Subscribed to [`AccountEvent::Upgrade`].
    pub accounting: Arc<AccountingSlackListener>,
}

impl AccountListeners {
    /// Create the standard listeners, all reporting to `sink`.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self {
            verification: Arc::new(VerificationEmailListener::new(Arc::clone(&sink))),
            receipt: Arc::new(ReceiptEmailListener::new(Arc::clone(&sink))),
            accounting: Arc::new(AccountingSlackListener::new(sink)),
        }
    }

    /// Each listener paired with the kind it belongs to.
    fn bindings(&self) -> [(AccountEvent, Arc<dyn Listener<Account>>); 3] {
        [
            (
                AccountEvent::Register,
                Arc::clone(&self.verification) as Arc<dyn Listener<Account>>,
            ),
            (
                AccountEvent::Upgrade,
                Arc::clone(&self.receipt) as Arc<dyn Listener<Account>>,
            ),
            (
                AccountEvent::Upgrade,
                Arc::clone(&self.accounting) as Arc<dyn Listener<Account>>,
            ),
        ]
    }
}

/// Registers and upgrades accounts, publishing an event after each change.
pub struct AccountClient {
    dispatcher: Dispatcher<AccountEvent, Account>,
    listeners: AccountListeners,
}

impl AccountClient {
    /// Create a client with the standard listeners subscribed.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self::from_settings(AccountSettings::default(), sink)
    }

    /// Create a client whose subscriptions follow `settings`.
    pub fn from_settings(settings: AccountSettings, sink: Arc<dyn NotifySink>) -> Self {
        let mut client = Self {
            dispatcher: Dispatcher::with_source("accounts"),
            listeners: AccountListeners::new(sink),
        };
        client.configure_test_mode(settings.test_mode);
        client
    }

    /// Create a client around a dispatcher prepared by the caller.
    ///
    /// Existing subscriptions are kept as they are. The standard listeners
    /// are created but only subscribed once test mode is switched off.
    pub fn with_dispatcher(
        dispatcher: Dispatcher<AccountEvent, Account>,
        sink: Arc<dyn NotifySink>,
    ) -> Self {
        Self {
            dispatcher,
            listeners: AccountListeners::new(sink),
        }
    }

    /// Register a new account on the free plan and publish
    /// [`AccountEvent::Register`].
    pub fn register_account(&self, name: impl Into<String>, email: impl Into<String>) -> Account {
        let account = Account::new(name, email);
        info!(name = %account.name, email = %account.email, plan = account.plan, "Account created");

        self.dispatcher.notify(AccountEvent::Register, &account);
        account
    }

    /// Move `account` to the premium plan and publish
    /// [`AccountEvent::Upgrade`].
    pub fn upgrade_account<'a>(&self, account: &'a mut Account) -> &'a mut Account {
        account.plan = PREMIUM_PLAN;
        info!(name = %account.name, email = %account.email, plan = account.plan, "Account upgraded");

        self.dispatcher.notify(AccountEvent::Upgrade, account);
        account
    }

    /// Switch test mode on or off.
    ///
    /// Test mode unsubscribes the standard listeners so no notification is
    /// sent; leaving it subscribes them again. Accounts are still created
    /// and upgraded normally.
    pub fn configure_test_mode(&mut self, enabled: bool) {
        for (kind, listener) in self.listeners.bindings() {
            if enabled {
                self.dispatcher.unsubscribe(kind, &listener);
            } else {
                self.dispatcher.subscribe(kind, listener);
            }
        }
        info!(enabled, "Account test mode configured");
    }

    /// Check if test mode is on.
    ///
    /// Read from the registry: test mode holds while none of the standard
    /// listeners is subscribed, however they were removed. Listeners added
    /// by the caller do not count.
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        !self
            .listeners
            .bindings()
            .iter()
            .any(|(kind, listener)| self.dispatcher.is_subscribed(*kind, listener))
    }

    /// The standard listener instances.
    #[must_use]
    pub fn listeners(&self) -> &AccountListeners {
        &self.listeners
    }

    /// The dispatcher this client publishes to.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<AccountEvent, Account> {
        &self.dispatcher
    }

    /// Mutable access for subscribing additional listeners.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<AccountEvent, Account> {
        &mut self.dispatcher
    }
}

impl std::fmt::Debug for AccountClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountClient")
            .field("dispatcher", &self.dispatcher)
            .field("test_mode", &self.is_test_mode())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Channel, MemorySink};
    use beacon_events::FnListener;

    fn client() -> (AccountClient, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (AccountClient::new(sink.clone()), sink)
    }

    #[test]
    fn test_default_subscriptions() {
        let (client, _) = client();
        let dispatcher = client.dispatcher();
        let listeners = client.listeners();

        assert!(!client.is_test_mode());
        assert_eq!(dispatcher.listener_count(AccountEvent::Register), 1);
        assert_eq!(dispatcher.listener_count(AccountEvent::Upgrade), 2);
        assert!(dispatcher.is_subscribed(AccountEvent::Register, &listeners.verification));
        assert!(dispatcher.is_subscribed(AccountEvent::Upgrade, &listeners.receipt));
        assert!(dispatcher.is_subscribed(AccountEvent::Upgrade, &listeners.accounting));
    }

    #[test]
    fn test_register_sends_verification_only() {
        let (client, sink) = client();

        let account = client.register_account("John Doe", "john.doe@foo.com");

        assert_eq!(account, Account::new("John Doe", "john.doe@foo.com"));
        assert_eq!(
            sink.messages_on(Channel::Email),
            vec!["Emailing john.doe@foo.com a verification code."]
        );
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_upgrade_sends_receipt_and_accounting() {
        let (client, sink) = client();
        let mut account = client.register_account("John Doe", "john.doe@foo.com");
        sink.clear();

        let upgraded = client.upgrade_account(&mut account);
        assert_eq!(upgraded.plan, PREMIUM_PLAN);

        assert_eq!(sink.len(), 2);
        assert_eq!(
            sink.messages_on(Channel::Email),
            vec!["Emailing john.doe@foo.com their receipt."]
        );
        assert_eq!(
            sink.messages_on(Channel::Chat),
            vec!["Sending a Slack message to Accounting; john.doe@foo.com upgraded their account."]
        );
        assert!(account.is_premium());
    }

    #[test]
    fn test_test_mode_suppresses_notifications() {
        let (mut client, sink) = client();
        client.configure_test_mode(true);

        let mut account = client.register_account("test", "testk@test.com");
        client.upgrade_account(&mut account);

        assert!(client.is_test_mode());
        assert!(sink.is_empty());
        assert!(client.dispatcher().is_empty());
        assert_eq!(account.plan, PREMIUM_PLAN);
    }

    #[test]
    fn test_leaving_test_mode_restores_listeners_once() {
        let (mut client, sink) = client();
        client.configure_test_mode(true);
        client.configure_test_mode(false);
        client.configure_test_mode(false);

        assert_eq!(client.dispatcher().len(), 3);

        client.register_account("John Doe", "john.doe@foo.com");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_from_settings_in_test_mode() {
        let sink = Arc::new(MemorySink::new());
        let client = AccountClient::from_settings(AccountSettings { test_mode: true }, sink.clone());

        client.register_account("test", "testk@test.com");
        assert!(sink.is_empty());
        assert!(client.dispatcher().is_empty());
    }

    #[test]
    fn test_external_dispatcher_and_extra_listener() {
        let sink = Arc::new(MemorySink::new());
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);

        let mut dispatcher: Dispatcher<AccountEvent, Account> = Dispatcher::with_source("external");
        dispatcher.subscribe(
            AccountEvent::Register,
            Arc::new(FnListener::new("audit", move |account: &Account| {
                seen_clone.lock().unwrap().push(account.email.clone());
            })),
        );

        let client = AccountClient::with_dispatcher(dispatcher, sink.clone());
        assert!(client.is_test_mode());

        client.register_account("Tim Cook", "tim.cook@bar.com");

        assert_eq!(*seen.lock().unwrap(), vec!["tim.cook@bar.com".to_string()]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unsubscribe_single_listener_externally() {
        let (mut client, sink) = client();
        let accounting = Arc::clone(&client.listeners().accounting);
        client
            .dispatcher_mut()
            .unsubscribe(AccountEvent::Upgrade, &accounting);

        let mut account = client.register_account("John Doe", "john.doe@foo.com");
        client.upgrade_account(&mut account);

        assert!(sink.messages_on(Channel::Chat).is_empty());
        assert_eq!(sink.messages_on(Channel::Email).len(), 2);
    }

    #[test]
    fn test_test_mode_follows_external_unsubscribe() {
        let (mut client, sink) = client();
        let listeners = client.listeners().clone();

        let dispatcher = client.dispatcher_mut();
        dispatcher.unsubscribe(AccountEvent::Register, &listeners.verification);
        dispatcher.unsubscribe(AccountEvent::Upgrade, &listeners.receipt);
        assert!(!client.is_test_mode());

        client
            .dispatcher_mut()
            .unsubscribe(AccountEvent::Upgrade, &listeners.accounting);
        assert!(client.dispatcher().is_empty());
        assert!(client.is_test_mode());

        let mut account = client.register_account("test", "testk@test.com");
        client.upgrade_account(&mut account);
        assert!(sink.is_empty());

        client.dispatcher_mut().subscribe(
            AccountEvent::Register,
            Arc::clone(&listeners.verification) as Arc<dyn Listener<Account>>,
        );
        assert!(!client.is_test_mode());
    }
}
