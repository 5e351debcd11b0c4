#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Layered configuration for Beacon workflows.
//!
//! A single [`Config`] covers logging and the feature switches of both
//! workflows.
//!
//! # Usage
//!
//! ```rust,no_run
//! use beacon_config::Config;
//!
//! let resolved = Config::load(Some(std::path::Path::new("beacon.toml"))).unwrap();
//! println!("spell check: {}", resolved.config.documents.spell_check);
//! ```
//!
//! # Configuration precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Config file** passed to [`Config::load`]
//! 2. **Environment variables** (`BEACON_*`), only for fields the file left unset
//! 3. **Embedded defaults** (`defaults.toml` compiled into the binary)
//!
//! # Design
//!
//! This crate has no dependencies on other beacon crates. Conversion into
//! publisher settings happens in `beacon-workflows` behind its `config`
//! feature.

/// Environment variable fallbacks.
pub mod env;
/// Configuration error types.
pub mod error;
/// Configuration file loading and merging.
pub mod loader;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

use std::collections::HashMap;
use std::path::Path;

pub use error::{ConfigError, ConfigResult};
pub use loader::ResolvedConfig;
pub use types::*;

impl Config {
    /// Load configuration from embedded defaults, an optional file, and the
    /// process environment.
    ///
    /// A `path` that does not exist is skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is malformed, an environment
    /// value cannot be parsed, or the result fails validation.
    pub fn load(path: Option<&Path>) -> ConfigResult<ResolvedConfig> {
        loader::load(path, &env::collect_env_vars())
    }

    /// Load configuration using an explicit set of environment variables.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with_env(
        path: Option<&Path>,
        env_vars: &HashMap<String, String>,
    ) -> ConfigResult<ResolvedConfig> {
        loader::load(path, env_vars)
    }

    /// Load configuration from a single file (no layering).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load_file(path: &Path) -> ConfigResult<Self> {
        loader::load_file(path)
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SerializeError`] if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
