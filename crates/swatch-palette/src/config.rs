//! Generator configuration.
//!
//! Loaded from TOML (every field optional, defaults fill the rest):
//!
//! ```toml
//! primary_max_attempts = 10000
//!
//! [harmony]
//! kind = "continuous"
//! min = 160.0
//! max = 200.0
//!
//! [strategy]
//! kind = "contrast-to-primary"
//! min_contrast = 7.0
//! max_attempts = 100
//! dark_fallback = "#202748"
//! light_fallback = "#E9EFDA"
//! ```

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use swatch_color::Rgb;
use thiserror::Error;

use crate::generator::SecondaryStrategy;
use crate::harmony::HarmonyBand;

/// Cap on primary draws before giving up.
pub const DEFAULT_PRIMARY_MAX_ATTEMPTS: usize = 10_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything the palette generator can be tuned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Random draws allowed when searching for a readable primary.
    pub primary_max_attempts: usize,
    /// Hue offsets for secondary candidates.
    pub harmony: HarmonyBand,
    /// How secondary candidates are accepted.
    pub strategy: SecondaryStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            primary_max_attempts: DEFAULT_PRIMARY_MAX_ATTEMPTS,
            harmony: HarmonyBand::default(),
            strategy: SecondaryStrategy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown variants
    /// and [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every loop is bounded and every range is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "primary_max_attempts must be at least 1".to_string(),
            ));
        }
        self.harmony.validate().map_err(ConfigError::Invalid)?;
        self.strategy.validate().map_err(ConfigError::Invalid)
    }

    /// Replace the secondary strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SecondaryStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the harmony band.
    #[must_use]
    pub fn with_harmony(mut self, harmony: HarmonyBand) -> Self {
        self.harmony = harmony;
        self
    }
}

/// Fallback secondary when the primary is light (black text).
pub const DARK_FALLBACK: Rgb = Rgb::new(0x20, 0x27, 0x48);

/// Fallback secondary when the primary is dark (white text).
pub const LIGHT_FALLBACK: Rgb = Rgb::new(0xE9, 0xEF, 0xDA);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
