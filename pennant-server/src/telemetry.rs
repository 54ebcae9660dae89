//! Log subscriber setup.
//!
//! `RUST_LOG`, when set, takes precedence over the configured level.

use crate::config::{LogFormat, LogSettings};
use crate::{ConfigError, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Build the filter for `settings`.
pub fn filter(settings: &LogSettings) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&settings.level)
        .map_err(|e| ConfigError::Validation(format!("Invalid log level: {}", e)))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init(settings: &LogSettings) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter(settings)?);

    let installed = match settings.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_ansi(settings.ansi))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(settings.ansi))
            .try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    installed.map_err(|e| ConfigError::Logging(e.to_string()))
}
