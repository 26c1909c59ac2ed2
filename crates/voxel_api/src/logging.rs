//! Logging setup for hosts embedding the API.
//!
//! The API itself only emits `tracing` events; installing a subscriber is up
//! to the process that owns `main`. This helper does it the same way for
//! every host.

use crate::config::LoggingSettings;
use crate::error::ConfigError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Sets up structured logging with environment-aware filtering and either
/// human readable or JSON output. Target module names are left out of each
/// line.
///
/// # Arguments
///
/// * `settings` - Logging section of the settings file
///
/// # Returns
///
/// `Ok(())` once the subscriber is installed, or [`ConfigError::Logging`] if
/// a global subscriber is already installed.
///
/// # Environment Variables
///
/// * `RUST_LOG` - Overrides the configured level (e.g. "debug",
///   "voxel_api=trace")
pub fn setup_logging(settings: &LoggingSettings) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let result = if settings.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(false))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init()
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}
