//! Test fixtures for workflow entities.

use std::sync::Arc;

use beacon_workflows::{
    Account, AccountClient, AccountSettings, Document, DocumentSettings, MemorySink, NotifySink,
    WordProcessor,
};

/// Name used by [`test_account`].
pub const TEST_ACCOUNT_NAME: &str = "John Doe";

/// Email used by [`test_account`].
pub const TEST_ACCOUNT_EMAIL: &str = "john.doe@foo.com";

/// A free-plan account with the standard test identity.
#[must_use]
pub fn test_account() -> Account {
    Account::new(TEST_ACCOUNT_NAME, TEST_ACCOUNT_EMAIL)
}

/// A free-plan account with a specific identity.
#[must_use]
pub fn test_account_for(name: impl Into<String>, email: impl Into<String>) -> Account {
    Account::new(name, email)
}

/// An open, empty document.
#[must_use]
pub fn test_document() -> Document {
    Document::new("test.txt")
}

/// A fresh in-memory sink.
#[must_use]
pub fn memory_sink() -> Arc<MemorySink> {
    Arc::new(MemorySink::new())
}

/// An account client with the standard listeners, reporting to `sink`.
#[must_use]
pub fn test_account_client(sink: Arc<dyn NotifySink>) -> AccountClient {
    AccountClient::from_settings(AccountSettings::default(), sink)
}

/// A word processor with spell checking and auto backup enabled.
#[must_use]
pub fn test_word_processor(sink: Arc<dyn NotifySink>) -> WordProcessor {
    WordProcessor::from_settings(
        DocumentSettings {
            spell_check: true,
            auto_backup: true,
            save_on_close: false,
        },
        sink,
    )
}
