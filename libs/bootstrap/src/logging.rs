//! Logging initialization.
//!
//! Events are written to stderr so that stdout carries only program output.
//! `RUST_LOG`, when set, replaces the configured level entirely.

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Logging section of an application config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `warn` or `mathutil=debug,info`.
    pub level: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            json: false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    #[error("global subscriber already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Resolve the filter directive from CLI verbosity (`-v` info, `-vv` debug,
/// `-vvv` trace), falling back to the configured level.
#[must_use]
pub fn effective_level(cfg: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => &cfg.level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global `tracing` subscriber.
///
/// # Errors
/// - [`LoggingError::InvalidFilter`] if the filter directive does not parse
/// - [`LoggingError::AlreadyInitialized`] if a global subscriber exists
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<(), LoggingError> {
    let directives = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(from_env) if !from_env.trim().is_empty() => from_env,
        _ => effective_level(cfg, verbose).to_owned(),
    };
    let filter = EnvFilter::try_new(&directives)?;

    let fmt_layer = if cfg.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(filter = %directives, json = cfg.json, "logging initialized");
    Ok(())
}
