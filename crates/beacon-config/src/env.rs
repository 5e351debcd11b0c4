//! Environment variable fallbacks.
//!
//! Env vars are **fallback**, not override: they are only applied to fields
//! that the config file did not set.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Prefix shared by every supported variable.
pub const ENV_PREFIX: &str = "BEACON_";

/// How the raw string of a variable becomes a TOML value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Str,
    Bool,
}

/// Mapping from environment variable name to config field path.
struct EnvMapping {
    var_name: &'static str,
    field_path: &'static str,
    kind: ValueKind,
}

/// All supported `BEACON_*` env var mappings.
const ENV_MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        var_name: "BEACON_LOG_LEVEL",
        field_path: "logging.level",
        kind: ValueKind::Str,
    },
    EnvMapping {
        var_name: "BEACON_LOG_FORMAT",
        field_path: "logging.format",
        kind: ValueKind::Str,
    },
    EnvMapping {
        var_name: "BEACON_TEST_MODE",
        field_path: "accounts.test_mode",
        kind: ValueKind::Bool,
    },
    EnvMapping {
        var_name: "BEACON_SPELL_CHECK",
        field_path: "documents.spell_check",
        kind: ValueKind::Bool,
    },
    EnvMapping {
        var_name: "BEACON_AUTO_BACKUP",
        field_path: "documents.auto_backup",
        kind: ValueKind::Bool,
    },
    EnvMapping {
        var_name: "BEACON_SAVE_ON_CLOSE",
        field_path: "documents.save_on_close",
        kind: ValueKind::Bool,
    },
];

/// Snapshot the `BEACON_*` variables of the current process.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars()
        .filter(|(key, _)| key.starts_with(ENV_PREFIX))
        .collect()
}

/// Apply env var fallbacks to `merged` for every field not in `file_fields`.
///
/// Returns the names of the variables that were applied.
///
/// # Errors
///
/// Returns [`ConfigError::EnvError`] if a boolean variable holds something
/// other than `true/false/1/0/yes/no/on/off`.
pub fn apply_env_fallbacks(
    merged: &mut toml::Value,
    file_fields: &HashSet<String>,
    env_vars: &HashMap<String, String>,
) -> ConfigResult<Vec<String>> {
    let mut applied = Vec::new();

    for mapping in ENV_MAPPINGS {
        if file_fields.contains(mapping.field_path) {
            continue;
        }
        let Some(raw) = env_vars.get(mapping.var_name) else {
            continue;
        };

        let value = match mapping.kind {
            ValueKind::Str => toml::Value::String(raw.trim().to_owned()),
            ValueKind::Bool => toml::Value::Boolean(parse_bool(mapping.var_name, raw)?),
        };

        set_path(merged, mapping.field_path, value);
        debug!(
            var = mapping.var_name,
            field = mapping.field_path,
            "applied environment fallback"
        );
        applied.push(mapping.var_name.to_owned());
    }

    Ok(applied)
}

fn parse_bool(var_name: &str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::EnvError {
            var_name: var_name.to_owned(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

/// Set a dotted `path` in a table tree, creating intermediate tables.
fn set_path(root: &mut toml::Value, path: &str, value: toml::Value) {
    let mut current = root;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if !current.is_table() {
            *current = toml::Value::Table(toml::map::Map::new());
        }
        let toml::Value::Table(table) = current else {
            return;
        };

        if segments.peek().is_none() {
            table.insert(segment.to_owned(), value);
            return;
        }

        current = table
            .entry(segment.to_owned())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }
}
