use serde::{Deserialize, Serialize};

use crate::Result;

const fn default_symbol_count() -> usize {
    20
}

/// Strongly typed view of the `settings:` section of the configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How many characters of content stand in for a missing note title.
    #[serde(default = "default_symbol_count")]
    pub symbol_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbol_count: default_symbol_count(),
        }
    }
}

impl Settings {
    /// Deserialize a strongly typed settings
    ///
    /// # Errors
    ///
    /// This function will return an error if deserialization fails
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Resolve settings from the optional config section, falling back to
    /// defaults when the section is absent.
    ///
    /// # Errors
    ///
    /// This function will return an error if deserialization fails
    pub fn from_config(value: Option<&serde_json::Value>) -> Result<Self> {
        value.map_or_else(|| Ok(Self::default()), Self::from_json)
    }
}
