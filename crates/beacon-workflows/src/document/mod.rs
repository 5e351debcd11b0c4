//! Document editing workflow.

mod listeners;
mod model;
mod processor;

pub use listeners::{BackupListener, SpellCheckListener};
pub use model::{Document, DocumentEvent};
pub use processor::{DocumentListeners, DocumentSettings, WordProcessor};
