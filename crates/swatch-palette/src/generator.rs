//! Readable palette generation by rejection sampling.
//!
//! The primary is drawn uniformly from the 24-bit RGB cube until black or
//! white text on it passes every WCAG level. The secondary is drawn from
//! harmonic candidates around the primary (see [`crate::harmony`]) and
//! accepted according to a [`SecondaryStrategy`]:
//!
//! - `SelfReadable`: the secondary must itself carry readable text at every
//!   level. Exhausting the cap is an error.
//! - `ContrastToPrimary`: the secondary must contrast with the primary by
//!   at least `min_contrast`. Exhausting the cap returns a fixed fallback
//!   chosen by the primary's text polarity.
//!
//! Every loop is capped by configuration. The generator owns only its
//! configuration and RNG; the current palette belongs to the caller.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use swatch_color::Rgb;
use tracing::{debug, trace, warn};

use crate::accessibility::best_text_color;
use crate::config::{DARK_FALLBACK, GeneratorConfig, LIGHT_FALLBACK};
use crate::contrast::contrast_ratio;
use crate::error::{Error, Result, Stage};
use crate::harmony::harmonic_candidate;
use crate::palette::Palette;

/// Cap on self-readable secondary draws.
pub const DEFAULT_SELF_READABLE_MAX_ATTEMPTS: usize = 10_000;

/// Primary-vs-secondary ratio required by default (WCAG AAA normal text).
pub const DEFAULT_MIN_CONTRAST: f64 = 7.0;

/// Cap on contrast-to-primary secondary draws before falling back.
pub const DEFAULT_CONTRAST_MAX_ATTEMPTS: usize = 100;

const fn default_self_readable_attempts() -> usize {
    DEFAULT_SELF_READABLE_MAX_ATTEMPTS
}

const fn default_min_contrast() -> f64 {
    DEFAULT_MIN_CONTRAST
}

const fn default_contrast_attempts() -> usize {
    DEFAULT_CONTRAST_MAX_ATTEMPTS
}

const fn default_dark_fallback() -> Rgb {
    DARK_FALLBACK
}

const fn default_light_fallback() -> Rgb {
    LIGHT_FALLBACK
}

// ---------------------------------------------------------------------------
// SecondaryStrategy
// ---------------------------------------------------------------------------

/// How a secondary candidate is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SecondaryStrategy {
    /// Accept a candidate whose best text color passes every WCAG level.
    SelfReadable {
        #[serde(default = "default_self_readable_attempts")]
        max_attempts: usize,
    },
    /// Accept a candidate contrasting with the primary by `min_contrast`,
    /// or fall back after `max_attempts` misses.
    ContrastToPrimary {
        #[serde(default = "default_min_contrast")]
        min_contrast: f64,
        #[serde(default = "default_contrast_attempts")]
        max_attempts: usize,
        /// Used when the primary takes black text.
        #[serde(default = "default_dark_fallback")]
        dark_fallback: Rgb,
        /// Used when the primary takes white text.
        #[serde(default = "default_light_fallback")]
        light_fallback: Rgb,
    },
}

impl Default for SecondaryStrategy {
    fn default() -> Self {
        Self::contrast_to_primary(DEFAULT_MIN_CONTRAST, DEFAULT_CONTRAST_MAX_ATTEMPTS)
    }
}

impl SecondaryStrategy {
    /// Self-readable strategy with the default cap.
    #[must_use]
    pub const fn self_readable() -> Self {
        Self::SelfReadable {
            max_attempts: DEFAULT_SELF_READABLE_MAX_ATTEMPTS,
        }
    }

    /// Contrast-to-primary strategy with the standard fallbacks.
    #[must_use]
    pub const fn contrast_to_primary(min_contrast: f64, max_attempts: usize) -> Self {
        Self::ContrastToPrimary {
            min_contrast,
            max_attempts,
            dark_fallback: DARK_FALLBACK,
            light_fallback: LIGHT_FALLBACK,
        }
    }

    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        match *self {
            Self::SelfReadable { max_attempts } => {
                if max_attempts == 0 {
                    return Err("self-readable max_attempts must be at least 1".to_string());
                }
            }
            Self::ContrastToPrimary {
                min_contrast,
                max_attempts,
                ..
            } => {
                if max_attempts == 0 {
                    return Err("contrast-to-primary max_attempts must be at least 1".to_string());
                }
                if !(1.0..=21.0).contains(&min_contrast) {
                    return Err(format!("min_contrast {min_contrast} is outside 1..=21"));
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PaletteGenerator
// ---------------------------------------------------------------------------

/// Draws readable primaries and harmonic secondaries.
#[derive(Debug)]
pub struct PaletteGenerator<R = ThreadRng> {
    config: GeneratorConfig,
    rng: R,
}

impl PaletteGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` fails validation.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, rand::rng())
    }
}

impl PaletteGenerator<StdRng> {
    /// Reproducible generator: the same seed and config yield the same
    /// palettes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` fails validation.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PaletteGenerator<R> {
    /// Generator over any RNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` fails validation.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A color drawn uniformly from `#000000..=#FFFFFF`.
    pub fn random_color(&mut self) -> Rgb {
        Rgb::from_u24(self.rng.random_range(0..=Rgb::MAX_U24))
    }

    /// Draw primaries until one takes text at every WCAG level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GenerationExhausted`] after
    /// `primary_max_attempts` rejected draws.
    pub fn generate_primary(&mut self) -> Result<Rgb> {
        let max_attempts = self.config.primary_max_attempts;
        for attempt in 1..=max_attempts {
            let candidate = self.random_color();
            let choice = best_text_color(candidate);
            if choice.passes().passes_all() {
                debug!(attempt, primary = %candidate, ratio = choice.ratio, "primary accepted");
                return Ok(candidate);
            }
            trace!(attempt, candidate = %candidate, ratio = choice.ratio, "primary rejected");
        }
        Err(Error::GenerationExhausted {
            stage: Stage::Primary,
            attempts: max_attempts,
        })
    }

    /// Draw a secondary for `primary` using the configured strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GenerationExhausted`] when the self-readable strategy
    /// runs out of attempts. The contrast-to-primary strategy never fails.
    pub fn generate_secondary(&mut self, primary: Rgb) -> Result<Rgb> {
        match self.config.strategy {
            SecondaryStrategy::SelfReadable { max_attempts } => {
                self.self_readable_secondary(primary, max_attempts)
            }
            SecondaryStrategy::ContrastToPrimary {
                min_contrast,
                max_attempts,
                dark_fallback,
                light_fallback,
            } => {
                let found = self.contrasting_secondary(primary, min_contrast, max_attempts);
                Ok(found.unwrap_or_else(|| {
                    let fallback = if best_text_color(primary).is_dark_text() {
                        dark_fallback
                    } else {
                        light_fallback
                    };
                    warn!(
                        %primary,
                        %fallback,
                        max_attempts,
                        min_contrast,
                        "no harmonic secondary reached the contrast target, using fallback"
                    );
                    fallback
                }))
            }
        }
    }

    fn self_readable_secondary(&mut self, primary: Rgb, max_attempts: usize) -> Result<Rgb> {
        for attempt in 1..=max_attempts {
            let candidate = harmonic_candidate(primary, &self.config.harmony, &mut self.rng);
            let choice = best_text_color(candidate);
            if choice.passes().passes_all() {
                debug!(attempt, %primary, secondary = %candidate, ratio = choice.ratio, "secondary accepted");
                return Ok(candidate);
            }
            trace!(attempt, candidate = %candidate, ratio = choice.ratio, "secondary rejected");
        }
        Err(Error::GenerationExhausted {
            stage: Stage::Secondary,
            attempts: max_attempts,
        })
    }

    fn contrasting_secondary(&mut self, primary: Rgb, min_contrast: f64, max_attempts: usize) -> Option<Rgb> {
        for attempt in 1..=max_attempts {
            let candidate = harmonic_candidate(primary, &self.config.harmony, &mut self.rng);
            let ratio = contrast_ratio(primary, candidate);
            if ratio >= min_contrast {
                debug!(attempt, %primary, secondary = %candidate, ratio, "secondary accepted");
                return Some(candidate);
            }
            trace!(attempt, candidate = %candidate, ratio, "secondary rejected");
        }
        None
    }

    /// Generate a fresh primary and a secondary for it.
    ///
    /// # Errors
    ///
    /// Propagates exhaustion from either search.
    pub fn generate(&mut self) -> Result<Palette> {
        let primary = self.generate_primary()?;
        let secondary = self.generate_secondary(primary)?;
        Ok(Palette::new(primary, secondary))
    }

    /// Produce the next palette for a UI holding `current`.
    ///
    /// With `lock_primary` set and a current palette present, the primary is
    /// kept and only the secondary is redrawn. Otherwise both are drawn.
    ///
    /// # Errors
    ///
    /// Propagates exhaustion from either search.
    pub fn regenerate(&mut self, current: Option<&Palette>, lock_primary: bool) -> Result<Palette> {
        let primary = match current {
            Some(palette) if lock_primary => palette.primary,
            _ => self.generate_primary()?,
        };
        let secondary = self.generate_secondary(primary)?;
        Ok(Palette::new(primary, secondary))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
