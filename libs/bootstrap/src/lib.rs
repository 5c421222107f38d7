//! Bootstrap helpers for the example binaries
//!
//! - [`config`]: layered configuration loading (defaults, YAML, environment)
//! - [`logging`]: `tracing` subscriber initialization

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod logging;

pub use config::{ConfigError, load_layered};
pub use logging::{LoggingConfig, LoggingError, init_logging};
