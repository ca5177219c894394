//! Which `config/{env}.yaml` the process runs with.
//!
//! ```rust
//! use notes_api::environment::Environment;
//!
//! assert_eq!(Environment::from("test"), Environment::Test);
//! assert_eq!(Environment::from("staging").to_string(), "staging");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_variant::to_variant_name;

use crate::{config::Config, Result};

/// Used when neither `--environment` nor [`ENV_VAR`] is given.
pub const DEFAULT_ENVIRONMENT: &str = "development";
/// Process variable naming the environment.
pub const ENV_VAR: &str = "NOTES_ENV";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    Production,
    /// Any other name; its file still has to exist under `config/`.
    #[serde(untagged)]
    Custom(String),
}

impl Environment {
    /// `flag` when given, else [`ENV_VAR`], else [`DEFAULT_ENVIRONMENT`].
    #[must_use]
    pub fn resolve(flag: Option<String>) -> Self {
        flag.or_else(|| std::env::var(ENV_VAR).ok())
            .as_deref()
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .into()
    }

    /// Read this environment's configuration file.
    ///
    /// # Errors
    ///
    /// When the file is missing or invalid.
    pub fn load(&self) -> Result<Config> {
        Config::new(self)
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        match name {
            "development" => Self::Development,
            "test" => Self::Test,
            "production" => Self::Production,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(name) => f.write_str(name),
            known => f.write_str(to_variant_name(known).map_err(|_| fmt::Error)?),
        }
    }
}
