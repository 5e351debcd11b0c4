//! Config file loading and layered merging.
//!
//! Implements the `Config::load()` algorithm:
//! 1. Parse `defaults.toml` → base
//! 2. Merge the config file, if present, recording the fields it sets
//! 3. Apply env var fallbacks for fields the file left unset
//! 4. Deserialize merged tree → `Config`
//! 5. Validate

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::env::apply_env_fallbacks;
use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// A loaded configuration together with where its values came from.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The effective configuration.
    pub config: Config,
    /// The config file that was merged, if one was found.
    pub loaded_file: Option<PathBuf>,
    /// Environment variables that supplied a value.
    pub applied_env: Vec<String>,
}

/// Load the configuration with layered precedence.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file is malformed, an environment value
/// is invalid, or the merged configuration fails validation.
pub fn load(path: Option<&Path>, env_vars: &HashMap<String, String>) -> ConfigResult<ResolvedConfig> {
    // 1. Parse embedded defaults.
    let mut merged: toml::Value =
        toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
            path: "<embedded defaults>".to_owned(),
            source: e,
        })?;

    // 2. Config file.
    let mut file_fields = HashSet::new();
    let mut loaded_file = None;
    if let Some(path) = path
        && let Some(overlay) = try_load_file(path)?
    {
        record_leaves(&overlay, "", &mut file_fields);
        deep_merge(&mut merged, &overlay);
        loaded_file = Some(path.to_path_buf());
        info!(path = %path.display(), "loaded config file");
    }

    // 3. Env var fallbacks.
    let applied_env = apply_env_fallbacks(&mut merged, &file_fields, env_vars)?;
    if !applied_env.is_empty() {
        debug!(count = applied_env.len(), "applied environment variable fallbacks");
    }

    // 4. Deserialize.
    let config: Config =
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<merged config>".to_owned(),
                source: e,
            })?;

    // 5. Validate.
    validate::validate(&config)?;

    Ok(ResolvedConfig {
        config,
        loaded_file,
        applied_env,
    })
}

/// Load a config from a specific file path (no layering).
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> ConfigResult<Config> {
    let content = read_bounded(path)?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;

    validate::validate(&config)?;
    Ok(config)
}

/// Try to load a file, returning `None` if the file doesn't exist.
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    let content = match read_bounded(path) {
        Ok(c) => c,
        Err(ConfigError::ReadError { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!(path = %path.display(), "config file not found, skipping");
            return Ok(None);
        },
        Err(e) => return Err(e),
    };

    let value: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(value))
}

/// Read at most one byte past the size limit and reject anything longer.
///
/// The file is opened once, so the size check and the content cannot
/// disagree.
fn read_bounded(path: &Path) -> ConfigResult<String> {
    let read_err = |e: std::io::Error| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut content = String::new();
    file.take(MAX_CONFIG_FILE_SIZE.saturating_add(1))
        .read_to_string(&mut content)
        .map_err(read_err)?;

    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!("config file exceeds the {MAX_CONFIG_FILE_SIZE} byte limit"),
        });
    }

    Ok(content)
}

/// Deep-merge `overlay` into `base`.
///
/// - Tables merge recursively per-field.
/// - Scalars and arrays from the overlay **replace** the base value.
fn deep_merge(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                if let Some(base_val) = base_table.get_mut(key) {
                    deep_merge(base_val, overlay_val);
                } else {
                    base_table.insert(key.clone(), overlay_val.clone());
                }
            }
        },
        (base, overlay) => {
            *base = overlay.clone();
        },
    }
}

/// Record the dotted path of every non-table value under `val`.
fn record_leaves(val: &toml::Value, prefix: &str, out: &mut HashSet<String>) {
    if let toml::Value::Table(table) = val {
        for (key, child) in table {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            record_leaves(child, &path, out);
        }
    } else {
        out.insert(prefix.to_owned());
    }
}
