//! The two-color palette and its accessibility report.
//!
//! A [`Palette`] is a plain value owned by the UI. Generation and manual
//! picks both produce a new one. [`PaletteReport`] is what a UI paints: for
//! each color, its readable text color and WCAG levels, then the same for
//! the primary/secondary pair.

use serde::{Deserialize, Serialize};
use swatch_color::Rgb;

use crate::accessibility::{TextChoice, WcagPasses, best_text_color, wcag_passes};
use crate::contrast::contrast_ratio;

/// A primary color and its secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Palette {
    #[must_use]
    pub const fn new(primary: Rgb, secondary: Rgb) -> Self {
        Self { primary, secondary }
    }

    /// Same palette with a manually picked primary.
    #[must_use]
    pub const fn with_primary(self, primary: Rgb) -> Self {
        Self { primary, ..self }
    }

    /// Same palette with a manually picked secondary.
    #[must_use]
    pub const fn with_secondary(self, secondary: Rgb) -> Self {
        Self { secondary, ..self }
    }

    /// Contrast between the two colors.
    #[must_use]
    pub fn pair_ratio(&self) -> f64 {
        contrast_ratio(self.primary, self.secondary)
    }

    #[must_use]
    pub fn report(&self) -> PaletteReport {
        let pair_ratio = self.pair_ratio();
        PaletteReport {
            primary: ColorReport::new(self.primary),
            secondary: ColorReport::new(self.secondary),
            pair_ratio,
            pair_passes: wcag_passes(pair_ratio),
        }
    }
}

/// One color as a background, with the text color to put on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorReport {
    pub color: Rgb,
    pub text: Rgb,
    pub ratio: f64,
    pub passes: WcagPasses,
}

impl ColorReport {
    #[must_use]
    pub fn new(color: Rgb) -> Self {
        let TextChoice { text, ratio } = best_text_color(color);
        Self {
            color,
            text,
            ratio,
            passes: wcag_passes(ratio),
        }
    }
}

/// Everything a UI needs to paint a palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteReport {
    pub primary: ColorReport,
    pub secondary: ColorReport,
    /// Contrast of the primary against the secondary.
    pub pair_ratio: f64,
    pub pair_passes: WcagPasses,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
