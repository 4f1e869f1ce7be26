//! Hex-string entry points for UI layers.
//!
//! A UI usually holds colors as the strings it reads from and writes to its
//! widgets. These wrappers parse on the way in and format on the way out;
//! parse failures are returned, never replaced with a default.

use serde::Serialize;
use swatch_color::Rgb;

use crate::accessibility::{self, WcagPasses};
use crate::config::GeneratorConfig;
use crate::contrast;
use crate::error::Result;
use crate::generator::{
    DEFAULT_CONTRAST_MAX_ATTEMPTS, DEFAULT_MIN_CONTRAST, PaletteGenerator, SecondaryStrategy,
};

/// [`accessibility::TextChoice`] with the text color as `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexTextChoice {
    pub text: String,
    pub ratio: f64,
}

/// A readable primary as `#RRGGBB`, using the default config.
///
/// # Errors
///
/// Returns [`crate::Error::GenerationExhausted`] if the default cap is hit.
pub fn generate_primary_until_readable() -> Result<String> {
    let mut generator = PaletteGenerator::new(GeneratorConfig::default())?;
    Ok(generator.generate_primary()?.to_hex())
}

/// A secondary for `primary_hex` contrasting with it by `min_contrast`
/// (default 7.0) within `max_attempts` draws (default 100), else the
/// fallback for the primary's polarity.
///
/// # Errors
///
/// Returns [`crate::Error::Color`] for a malformed `primary_hex` and
/// [`crate::Error::Config`] for a zero attempt count or a ratio outside
/// `1..=21`.
pub fn generate_secondary_until_readable(
    primary_hex: &str,
    min_contrast: Option<f64>,
    max_attempts: Option<usize>,
) -> Result<String> {
    let primary = Rgb::from_hex(primary_hex)?;
    let strategy = SecondaryStrategy::contrast_to_primary(
        min_contrast.unwrap_or(DEFAULT_MIN_CONTRAST),
        max_attempts.unwrap_or(DEFAULT_CONTRAST_MAX_ATTEMPTS),
    );
    let mut generator = PaletteGenerator::new(GeneratorConfig::default().with_strategy(strategy))?;
    Ok(generator.generate_secondary(primary)?.to_hex())
}

/// Black or white text for `hex`, whichever contrasts more.
///
/// # Errors
///
/// Returns [`crate::Error::Color`] for a malformed `hex`.
pub fn best_text_color(hex: &str) -> Result<HexTextChoice> {
    let choice = accessibility::best_text_color(Rgb::from_hex(hex)?);
    Ok(HexTextChoice {
        text: choice.text.to_hex(),
        ratio: choice.ratio,
    })
}

/// Contrast ratio between two hex colors.
///
/// # Errors
///
/// Returns [`crate::Error::Color`] if either input is malformed.
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> Result<f64> {
    Ok(contrast::contrast_ratio(Rgb::from_hex(hex_a)?, Rgb::from_hex(hex_b)?))
}

/// WCAG levels met by `ratio`.
#[must_use]
pub fn wcag_passes(ratio: f64) -> WcagPasses {
    accessibility::wcag_passes(ratio)
}
