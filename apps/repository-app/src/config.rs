use std::path::Path;

use serde::{Deserialize, Serialize};
use tw_bootstrap::{ConfigError, LoggingConfig, load_layered};

/// Prefix for environment overrides, e.g. `REPO_APP__OPERANDS__A=7`.
pub const ENV_PREFIX: &str = "REPO_APP__";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub operands: Operands,
    pub logging: LoggingConfig,
}

/// Operands every operation is applied to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

impl Default for Operands {
    fn default() -> Self {
        Self { a: 10, b: 5 }
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub a: Option<i64>,
    pub b: Option<i64>,
}

impl AppConfig {
    /// Defaults, then YAML (if provided), then `REPO_APP__*` environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file is missing or the merged config is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_layered(path, ENV_PREFIX)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(a) = overrides.a {
            self.operands.a = a;
        }
        if let Some(b) = overrides.b {
            self.operands.b = b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_example() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.operands, Operands { a: 10, b: 5 });
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn cli_overrides_only_replace_given_values() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(CliOverrides {
            a: None,
            b: Some(0),
        });
        assert_eq!(cfg.operands, Operands { a: 10, b: 0 });
    }
}
