//! Document publisher.

use std::sync::Arc;

use beacon_events::{Dispatcher, Listener};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::listeners::{BackupListener, SpellCheckListener};
use super::model::{Document, DocumentEvent};
use crate::sink::NotifySink;

/// Feature switches for a [`WordProcessor`].
///
/// The default turns spell checking and auto backup on and save-on-close
/// off, the same as the `[documents]` config defaults. [`WordProcessor::new`]
/// starts with nothing subscribed regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Spell-check after every edit.
    pub spell_check: bool,
    /// Back documents up when they are closed.
    pub auto_backup: bool,
    /// Mark documents saved when they are closed.
    pub save_on_close: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            spell_check: true,
            auto_backup: true,
            save_on_close: false,
        }
    }
}

/// The standard listener instances of the document workflow.
#[derive(Clone)]
pub struct DocumentListeners {
    /// Subscribed to [`DocumentEvent::Update`] while spell checking is on.
    pub spell_checker: Arc<SpellCheckListener>,
    /// Subscribed to [`DocumentEvent::Close`] while auto backup is on.
    pub backup: Arc<BackupListener>,
}

impl DocumentListeners {
    /// Create the standard listeners, both reporting to `sink`.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self {
            spell_checker: Arc::new(SpellCheckListener::new(Arc::clone(&sink))),
            backup: Arc::new(BackupListener::new(sink)),
        }
    }
}

/// Creates, edits and closes documents, publishing an event after each change.
pub struct WordProcessor {
    dispatcher: Dispatcher<DocumentEvent, Document>,
    listeners: DocumentListeners,
    save_on_close: bool,
}

impl WordProcessor {
    /// Create a processor with spell checking and auto backup off.
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self {
            dispatcher: Dispatcher::with_source("documents"),
            listeners: DocumentListeners::new(sink),
            save_on_close: false,
        }
    }

    /// Create a processor whose subscriptions follow `settings`.
    pub fn from_settings(settings: DocumentSettings, sink: Arc<dyn NotifySink>) -> Self {
        let mut processor = Self::new(sink);
        processor.configure_spell_checker(settings.spell_check);
        processor.configure_auto_backup(settings.auto_backup);
        processor.configure_save_on_close(settings.save_on_close);
        processor
    }

    /// Create an open, empty document and publish [`DocumentEvent::Create`].
    pub fn create_document(&self, name: impl Into<String>) -> Document {
        let document = Document::new(name);
        info!(name = %document.name, "Created document");

        self.dispatcher.notify(DocumentEvent::Create, &document);
        document
    }

    /// Append `text` and publish [`DocumentEvent::Update`].
    ///
    /// The document becomes unsaved.
    pub fn add_text<'a>(&self, document: &'a mut Document, text: &str) -> &'a mut Document {
        document.content.push_str(text);
        document.is_saved = false;
        info!(name = %document.name, content = %document.content, "Document now reads");

        self.dispatcher.notify(DocumentEvent::Update, document);
        document
    }

    /// Close the document and publish [`DocumentEvent::Close`].
    ///
    /// With save-on-close configured the document is also marked saved
    /// before listeners run.
    pub fn close_document<'a>(&self, document: &'a mut Document) -> &'a mut Document {
        document.is_open = false;
        if self.save_on_close {
            document.is_saved = true;
        }
        info!(name = %document.name, saved = document.is_saved, "Closed document");

        self.dispatcher.notify(DocumentEvent::Close, document);
        document
    }

    /// Turn spell checking after each edit on or off.
    pub fn configure_spell_checker(&mut self, enabled: bool) {
        let listener = Arc::clone(&self.listeners.spell_checker);
        self.toggle(DocumentEvent::Update, listener, enabled);
        info!(enabled, "Spell checker configured");
    }

    /// Turn backup on close on or off.
    pub fn configure_auto_backup(&mut self, enabled: bool) {
        let listener = Arc::clone(&self.listeners.backup);
        self.toggle(DocumentEvent::Close, listener, enabled);
        info!(enabled, "Auto backup configured");
    }

    /// Choose whether closing a document also marks it saved.
    pub fn configure_save_on_close(&mut self, enabled: bool) {
        self.save_on_close = enabled;
    }

    /// Check if spell checking is subscribed.
    #[must_use]
    pub fn spell_check_enabled(&self) -> bool {
        self.dispatcher
            .is_subscribed(DocumentEvent::Update, &self.listeners.spell_checker)
    }

    /// Check if auto backup is subscribed.
    #[must_use]
    pub fn auto_backup_enabled(&self) -> bool {
        self.dispatcher
            .is_subscribed(DocumentEvent::Close, &self.listeners.backup)
    }

    /// Check if closing marks documents saved.
    #[must_use]
    pub fn save_on_close(&self) -> bool {
        self.save_on_close
    }

    /// The standard listener instances.
    #[must_use]
    pub fn listeners(&self) -> &DocumentListeners {
        &self.listeners
    }

    /// The dispatcher this processor publishes to.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<DocumentEvent, Document> {
        &self.dispatcher
    }

    /// Mutable access for subscribing additional listeners.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<DocumentEvent, Document> {
        &mut self.dispatcher
    }

    fn toggle(&mut self, kind: DocumentEvent, listener: Arc<dyn Listener<Document>>, enabled: bool) {
        if enabled {
            self.dispatcher.subscribe(kind, listener);
        } else {
            self.dispatcher.unsubscribe(kind, &listener);
        }
    }
}

impl std::fmt::Debug for WordProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordProcessor")
            .field("dispatcher", &self.dispatcher)
            .field("save_on_close", &self.save_on_close)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{Channel, MemorySink};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn processor(settings: DocumentSettings) -> (WordProcessor, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (WordProcessor::from_settings(settings, sink.clone()), sink)
    }

    fn all_on() -> DocumentSettings {
        DocumentSettings {
            spell_check: true,
            auto_backup: true,
            save_on_close: false,
        }
    }

    fn all_off() -> DocumentSettings {
        DocumentSettings {
            spell_check: false,
            auto_backup: false,
            save_on_close: false,
        }
    }

    #[test]
    fn test_settings_default_enables_checks() {
        assert_eq!(DocumentSettings::default(), all_on());

        let parsed: DocumentSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, all_on());

        let parsed: DocumentSettings = serde_json::from_str(r#"{"auto_backup":false}"#).unwrap();
        assert!(parsed.spell_check);
        assert!(!parsed.auto_backup);
    }

    #[test]
    fn test_new_processor_has_no_subscriptions() {
        let processor = WordProcessor::new(Arc::new(MemorySink::new()));
        assert!(processor.dispatcher().is_empty());
        assert!(!processor.spell_check_enabled());
        assert!(!processor.auto_backup_enabled());
    }

    #[test]
    fn test_create_document_notifies_nobody_by_default() {
        let (processor, sink) = processor(all_on());

        let document = processor.create_document("foo.txt");

        assert_eq!(document, Document::new("foo.txt"));
        assert!(document.is_open);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_create_kind_can_be_subscribed() {
        let (mut processor, _) = processor(all_off());
        let created = Arc::new(AtomicUsize::new(0));
        let created_clone = Arc::clone(&created);
        processor.dispatcher_mut().subscribe(
            DocumentEvent::Create,
            Arc::new(beacon_events::FnListener::new("created", move |_: &Document| {
                created_clone.fetch_add(1, Ordering::SeqCst);
            })),
        );

        processor.create_document("foo.txt");
        assert_eq!(created.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_each_edit_is_spell_checked() {
        let (processor, sink) = processor(all_on());
        let mut document = processor.create_document("foo.txt");

        processor.add_text(&mut document, "bar");
        processor.add_text(&mut document, " baz");

        assert_eq!(document.content, "bar baz");
        assert_eq!(
            sink.messages_on(Channel::SpellCheck),
            vec!["spell-checked foo.txt", "spell-checked foo.txt"]
        );
        assert!(sink.messages_on(Channel::CloudBackup).is_empty());
    }

    #[test]
    fn test_close_backs_up_when_enabled() {
        let (processor, sink) = processor(all_on());
        let mut document = processor.create_document("foo.txt");
        processor.add_text(&mut document, "bar");

        processor.close_document(&mut document);

        assert!(!document.is_open);
        assert!(!document.is_saved);
        assert_eq!(
            sink.messages_on(Channel::CloudBackup),
            vec!["Backed up [foo.txt] to Google Drive"]
        );
    }

    #[test]
    fn test_close_without_backup() {
        let (processor, sink) = processor(all_off());
        let mut document = processor.create_document("foo.txt");

        processor.close_document(&mut document);

        assert!(!document.is_open);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_save_on_close_variant() {
        let (processor, _) = processor(DocumentSettings {
            save_on_close: true,
            ..all_on()
        });
        let mut document = processor.create_document("foo.txt");
        processor.add_text(&mut document, "bar");
        assert!(!document.is_saved);

        let closed = processor.close_document(&mut document);
        assert!(!closed.is_open);
        assert!(closed.is_saved);
    }

    #[test]
    fn test_disabling_spell_checker_at_runtime() {
        let (mut processor, sink) = processor(all_on());
        processor.configure_spell_checker(false);
        assert!(!processor.spell_check_enabled());

        let mut document = processor.create_document("foo.txt");
        processor.add_text(&mut document, "bar");
        processor.add_text(&mut document, " baz");
        processor.close_document(&mut document);

        assert!(sink.messages_on(Channel::SpellCheck).is_empty());
        assert_eq!(sink.messages_on(Channel::CloudBackup).len(), 1);
    }

    #[test]
    fn test_toggles_are_idempotent() {
        let (mut processor, sink) = processor(all_off());
        processor.configure_spell_checker(true);
        processor.configure_spell_checker(true);
        processor.configure_auto_backup(false);

        assert_eq!(processor.dispatcher().listener_count(DocumentEvent::Update), 1);
        assert_eq!(processor.dispatcher().listener_count(DocumentEvent::Close), 0);

        let mut document = processor.create_document("foo.txt");
        processor.add_text(&mut document, "bar");
        assert_eq!(sink.len(), 1);
    }
}
