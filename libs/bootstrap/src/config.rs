//! Layered configuration loading.
//!
//! Precedence, lowest to highest:
//! 1. `T::default()`
//! 2. YAML file (if a path is given)
//! 3. environment variables with the given prefix, `__` separating nested keys
//!
//! CLI overrides are applied by the caller on the extracted value.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Configuration loading error
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

/// Load a configuration of type `T` from defaults, an optional YAML file and
/// the environment.
///
/// With `env_prefix = "REPO_APP__"`, the variable `REPO_APP__OPERANDS__A=7`
/// sets `operands.a` to `7`.
///
/// # Errors
/// - [`ConfigError::FileNotFound`] if `path` is given but is not a file
/// - [`ConfigError::Invalid`] if the merged sources do not deserialize into `T`
pub fn load_layered<T>(path: Option<&Path>, env_prefix: &str) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned + Default,
{
    let mut figment = Figment::from(Serialized::defaults(T::default()));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(env_prefix).split("__"))
        .extract()
        .map_err(|e| ConfigError::Invalid(Box::new(e)))
}
