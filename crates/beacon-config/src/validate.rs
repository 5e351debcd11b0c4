//! Configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::{Config, LoggingSection};

/// Accepted values for `logging.level`.
pub const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepted values for `logging.format`.
pub const VALID_FORMATS: &[&str] = &["pretty", "compact", "json", "full"];

/// Validate the entire configuration.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationError`] for the first invalid field.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_logging(&config.logging)
}

fn validate_logging(logging: &LoggingSection) -> ConfigResult<()> {
    if !VALID_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.level".to_owned(),
            message: format!(
                "invalid log level '{}', expected one of: {}",
                logging.level,
                VALID_LEVELS.join(", ")
            ),
        });
    }

    if !VALID_FORMATS.contains(&logging.format.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.format".to_owned(),
            message: format!(
                "invalid log format '{}', expected one of: {}",
                logging.format,
                VALID_FORMATS.join(", ")
            ),
        });
    }

    for (i, directive) in logging.directives.iter().enumerate() {
        if directive.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: format!("logging.directives[{i}]"),
                message: "directive must not be empty".to_owned(),
            });
        }
    }

    Ok(())
}
