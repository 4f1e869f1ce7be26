// SPDX-License-Identifier: MIT
//
// swatch.toml — one file for the generator and the logger:
//
//   [generator]
//   primary_max_attempts = 10000
//   [generator.strategy]
//   kind = "self-readable"
//
//   [log]
//   level = "info"
//   format = "json"
//
// Command-line flags are applied on top of whatever the file sets.

use std::path::Path;

use serde::{Deserialize, Serialize};
use swatch_palette::{ConfigError, GeneratorConfig};

use crate::logging::LogConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
