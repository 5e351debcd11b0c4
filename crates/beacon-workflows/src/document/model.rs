//! Document entity and its event kinds.

use beacon_events::EventKind;
use serde::{Deserialize, Serialize};

/// A word-processor document.
///
/// Lifecycle: created open and unsaved, edited any number of times, then
/// closed. There is no reopen transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name.
    pub name: String,
    /// Full text content.
    pub content: String,
    /// Whether the document is still open for editing.
    pub is_open: bool,
    /// Whether the current content has been saved.
    pub is_saved: bool,
}

impl Document {
    /// Create an empty, open, unsaved document.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
            is_open: true,
            is_saved: false,
        }
    }
}

/// Notification channels of the document workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentEvent {
    /// A document was created. No listener subscribes to it by default.
    Create,
    /// Text was added to a document.
    Update,
    /// A document was closed.
    Close,
}

impl EventKind for DocumentEvent {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Close => "close",
        }
    }
}
