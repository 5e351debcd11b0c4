//! Beacon Telemetry - Logging setup for Beacon workflows.
//!
//! Installs a global `tracing` subscriber from a [`LogConfig`]: an
//! `EnvFilter` built from the level and per-target directives, one of four
//! output formats, and a stdout, stderr or rolling-file target.
//!
//! # Example
//!
//! ```rust,no_run
//! use beacon_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), beacon_telemetry::TelemetryError> {
//! let config = LogConfig::new("debug")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("beacon_events=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```
//!
//! With the `config` feature, a [`LogConfig`] can be built from
//! `beacon_config::LoggingSection`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    FileLogConfig, FileRotation, LogConfig, LogFormat, LogTarget, setup_default_logging,
    setup_logging,
};
