//! Readable text selection and WCAG pass levels.
//!
//! A background gets whichever of pure black or pure white contrasts more
//! with it (black wins ties). A ratio is graded against the four WCAG
//! thresholds for normal and large text.

use std::fmt;

use bitflags::bitflags;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use swatch_color::Rgb;

use crate::contrast::contrast_ratio;

/// Minimum ratio for normal-size text at level AA.
pub const NORMAL_AA: f64 = 4.5;
/// Minimum ratio for normal-size text at level AAA.
pub const NORMAL_AAA: f64 = 7.0;
/// Minimum ratio for large text at level AA.
pub const LARGE_AA: f64 = 3.0;
/// Minimum ratio for large text at level AAA.
///
/// Shares its value with [`NORMAL_AA`] as published by WCAG.
pub const LARGE_AAA: f64 = 4.5;

bitflags! {
    /// The WCAG levels a contrast ratio satisfies.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WcagPasses: u8 {
        const NORMAL_AA = 1 << 0;
        const NORMAL_AAA = 1 << 1;
        const LARGE_AA = 1 << 2;
        const LARGE_AAA = 1 << 3;
    }
}

impl WcagPasses {
    /// Every level, in display order, with its label and threshold.
    pub const LEVELS: [(Self, &'static str, f64); 4] = [
        (Self::NORMAL_AA, "Normal AA", NORMAL_AA),
        (Self::NORMAL_AAA, "Normal AAA", NORMAL_AAA),
        (Self::LARGE_AA, "Large AA", LARGE_AA),
        (Self::LARGE_AAA, "Large AAA", LARGE_AAA),
    ];

    /// Grade a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self::LEVELS
            .iter()
            .filter(|(_, _, threshold)| ratio >= *threshold)
            .fold(Self::empty(), |acc, (level, _, _)| acc | *level)
    }

    #[must_use]
    pub const fn normal_aa(self) -> bool {
        self.contains(Self::NORMAL_AA)
    }

    #[must_use]
    pub const fn normal_aaa(self) -> bool {
        self.contains(Self::NORMAL_AAA)
    }

    #[must_use]
    pub const fn large_aa(self) -> bool {
        self.contains(Self::LARGE_AA)
    }

    #[must_use]
    pub const fn large_aaa(self) -> bool {
        self.contains(Self::LARGE_AAA)
    }

    /// True when all four levels pass.
    #[must_use]
    pub const fn passes_all(self) -> bool {
        self.is_all()
    }
}

impl Serialize for WcagPasses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("WcagPasses", 4)?;
        s.serialize_field("normal_aa", &self.normal_aa())?;
        s.serialize_field("normal_aaa", &self.normal_aaa())?;
        s.serialize_field("large_aa", &self.large_aa())?;
        s.serialize_field("large_aaa", &self.large_aaa())?;
        s.end()
    }
}

/// Grade a contrast ratio against the four WCAG thresholds.
#[must_use]
pub fn wcag_passes(ratio: f64) -> WcagPasses {
    WcagPasses::from_ratio(ratio)
}

/// The text color chosen for a background, and how well it contrasts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextChoice {
    pub text: Rgb,
    pub ratio: f64,
}

impl TextChoice {
    /// WCAG levels met by this text on its background.
    #[must_use]
    pub fn passes(self) -> WcagPasses {
        wcag_passes(self.ratio)
    }

    /// Whether the chosen text is black (i.e. the background is light).
    #[must_use]
    pub fn is_dark_text(self) -> bool {
        self.text == Rgb::BLACK
    }
}

impl fmt::Display for TextChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}:1)", self.text, self.ratio)
    }
}

/// Pick black or white text for `background`, whichever contrasts more.
///
/// Ties go to black.
#[must_use]
pub fn best_text_color(background: Rgb) -> TextChoice {
    let with_black = contrast_ratio(background, Rgb::BLACK);
    let with_white = contrast_ratio(background, Rgb::WHITE);
    if with_black >= with_white {
        TextChoice {
            text: Rgb::BLACK,
            ratio: with_black,
        }
    } else {
        TextChoice {
            text: Rgb::WHITE,
            ratio: with_white,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
