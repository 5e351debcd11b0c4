//! Integration tests for the document workflow.

use std::sync::Arc;

use beacon_events::Listener;
use beacon_test::{RecordingListener, RecordingSink, test_word_processor};
use beacon_workflows::{Channel, Document, DocumentEvent, DocumentSettings, WordProcessor};

#[test]
fn test_edit_and_close_with_checks_enabled() {
    let sink = RecordingSink::new();
    let processor = test_word_processor(sink.shared());

    let mut document = processor.create_document("notes.txt");
    assert!(sink.is_empty());

    processor.add_text(&mut document, "Hello");
    processor.add_text(&mut document, ", world");
    assert_eq!(document.content, "Hello, world");
    assert_eq!(sink.count_on(Channel::SpellCheck), 2);
    assert!(sink.contains(Channel::SpellCheck, "spell-checked notes.txt"));

    processor.close_document(&mut document);
    assert!(!document.is_open);
    assert!(!document.is_saved);
    assert!(sink.contains(Channel::CloudBackup, "Backed up [notes.txt] to Google Drive"));
    assert_eq!(sink.len(), 3);
}

#[test]
fn test_default_processor_has_no_reactions() {
    let sink = RecordingSink::new();
    let processor = WordProcessor::new(sink.shared());

    let mut document = processor.create_document("draft.txt");
    processor.add_text(&mut document, "text");
    processor.close_document(&mut document);

    assert!(sink.is_empty());
    assert!(processor.dispatcher().is_empty());
}

#[test]
fn test_toggling_spell_checker_mid_session() {
    let sink = RecordingSink::new();
    let mut processor = test_word_processor(sink.shared());
    let mut document = processor.create_document("essay.txt");

    processor.add_text(&mut document, "one");
    processor.configure_spell_checker(false);
    processor.add_text(&mut document, " two");
    processor.configure_spell_checker(true);
    processor.configure_spell_checker(true);
    processor.add_text(&mut document, " three");

    assert_eq!(sink.count_on(Channel::SpellCheck), 2);
    assert_eq!(
        processor.dispatcher().listener_count(DocumentEvent::Update),
        1
    );
}

#[test]
fn test_save_on_close_marks_document_saved() {
    let sink = RecordingSink::new();
    let mut processor = WordProcessor::from_settings(
        DocumentSettings {
            spell_check: false,
            auto_backup: true,
            save_on_close: true,
        },
        sink.shared(),
    );
    let recorder = Arc::new(RecordingListener::<Document>::new("close_recorder"));
    processor.dispatcher_mut().subscribe(
        DocumentEvent::Close,
        Arc::clone(&recorder) as Arc<dyn Listener<Document>>,
    );

    let mut document = processor.create_document("report.txt");
    processor.add_text(&mut document, "quarterly numbers");
    processor.close_document(&mut document);

    assert!(document.is_saved);
    assert!(!document.is_open);

    // Listeners see the document after the transition.
    let seen = recorder.last().unwrap();
    assert!(seen.is_saved);
    assert!(!seen.is_open);
    assert_eq!(sink.count_on(Channel::CloudBackup), 1);
    assert_eq!(sink.count_on(Channel::SpellCheck), 0);
}

#[test]
fn test_create_kind_reaches_external_listener() {
    let sink = RecordingSink::new();
    let mut processor = WordProcessor::new(sink.shared());
    let recorder = Arc::new(RecordingListener::<Document>::new("create_recorder"));

    processor.dispatcher_mut().subscribe(
        DocumentEvent::Create,
        Arc::clone(&recorder) as Arc<dyn Listener<Document>>,
    );

    let document = processor.create_document("fresh.txt");

    assert_eq!(recorder.count(), 1);
    assert_eq!(recorder.last(), Some(document));
}

#[tokio::test]
async fn test_tap_counts_document_dispatches() {
    let sink = RecordingSink::new();
    let processor = test_word_processor(sink.shared());
    let mut records = processor.dispatcher().tap();

    let mut document = processor.create_document("tapped.txt");
    processor.add_text(&mut document, "x");
    processor.close_document(&mut document);

    let mut seen = Vec::new();
    while let Some(record) = records.try_recv() {
        seen.push((record.kind, record.delivered));
    }

    assert_eq!(
        seen,
        vec![
            (DocumentEvent::Create, 0),
            (DocumentEvent::Update, 1),
            (DocumentEvent::Close, 1),
        ]
    );
    assert_eq!(sink.len(), 2);

    drop(processor);
    assert!(records.recv().await.is_none());
}
