//! Side-effect listeners for document events.

use std::sync::Arc;

use beacon_events::Listener;

use super::model::Document;
use crate::sink::{Channel, NotifySink};

/// Spell-checks a document after each edit.
pub struct SpellCheckListener {
    sink: Arc<dyn NotifySink>,
}

impl SpellCheckListener {
    /// Create a listener reporting to `sink`.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self { sink }
    }
}

impl Listener<Document> for SpellCheckListener {
    fn on_event(&self, document: &Document) {
        self.sink
            .deliver(Channel::SpellCheck, &format!("spell-checked {}", document.name));
    }

    fn name(&self) -> &str {
        "spell_checker"
    }
}

/// Backs a document up to cloud storage when it is closed.
pub struct BackupListener {
    sink: Arc<dyn NotifySink>,
}

impl BackupListener {
    /// Create a listener reporting to `sink`.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self { sink }
    }
}

impl Listener<Document> for BackupListener {
    fn on_event(&self, document: &Document) {
        self.sink.deliver(
            Channel::CloudBackup,
            &format!("Backed up [{}] to Google Drive", document.name),
        );
    }

    fn name(&self) -> &str {
        "backup"
    }
}
