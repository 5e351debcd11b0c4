//! Configuration types.
//!
//! Every struct implements [`Default`] with the same values as the embedded
//! `defaults.toml`, so a bare `[section]` header in TOML produces a working
//! configuration.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging level, format, and per-target directives.
    pub logging: LoggingSection,
    /// Account workflow switches.
    pub accounts: AccountsSection,
    /// Document workflow switches.
    pub documents: DocumentsSection,
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging and tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"`, or `"full"`.
    pub format: String,
    /// Per-target tracing directives (e.g. `["beacon_events=trace"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "compact".to_owned(),
            directives: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// AccountsSection
// ---------------------------------------------------------------------------

/// Account workflow configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsSection {
    /// Suppress verification, receipt and accounting notifications.
    pub test_mode: bool,
}

// ---------------------------------------------------------------------------
// DocumentsSection
// ---------------------------------------------------------------------------

/// Document workflow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsSection {
    /// Spell-check after every edit.
    pub spell_check: bool,
    /// Back documents up when they are closed.
    pub auto_backup: bool,
    /// Mark documents saved when they are closed.
    pub save_on_close: bool,
}

impl Default for DocumentsSection {
    fn default() -> Self {
        Self {
            spell_check: true,
            auto_backup: true,
            save_on_close: false,
        }
    }
}
