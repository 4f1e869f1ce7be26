//! Harmonic secondary candidates.
//!
//! A candidate keeps a softened version of the primary's saturation, sits
//! across the color wheel from it (hue + an offset from the configured
//! band), and takes lightness from the opposite half of the range so it
//! reads against the primary.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use swatch_color::{Hsl, Rgb};

/// Candidate saturation is clamped into this range.
pub const SATURATION_RANGE: RangeInclusive<f64> = 0.35..=0.85;

/// Candidate lightness is clamped into this range.
pub const LIGHTNESS_RANGE: RangeInclusive<f64> = 0.15..=0.85;

/// Primary saturation is scaled by this before clamping.
const SATURATION_SCALE: f64 = 0.7;

/// Hue offsets used by the default discrete band.
pub const DEFAULT_OFFSETS: [f64; 3] = [150.0, 180.0, 210.0];

/// Where the secondary hue may land relative to the primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HarmonyBand {
    /// One of a fixed set of offsets, chosen uniformly.
    Discrete { offsets: Vec<f64> },
    /// Any offset in `[min, max]` degrees, chosen uniformly.
    Continuous { min: f64, max: f64 },
}

impl Default for HarmonyBand {
    fn default() -> Self {
        Self::Discrete {
            offsets: DEFAULT_OFFSETS.to_vec(),
        }
    }
}

impl HarmonyBand {
    /// The near-complementary 160°–200° range.
    #[must_use]
    pub const fn near_complement() -> Self {
        Self::Continuous {
            min: 160.0,
            max: 200.0,
        }
    }

    /// Draw a hue offset in degrees.
    ///
    /// Only reached through a `PaletteGenerator`, whose constructors run
    /// [`Self::validate`]: offsets are non-empty and `min <= max`.
    pub(crate) fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Discrete { offsets } => offsets[rng.random_range(0..offsets.len())],
            Self::Continuous { min, max } => rng.random_range(*min..=*max),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            Self::Discrete { offsets } => {
                if offsets.is_empty() {
                    return Err("harmony offsets must not be empty".to_string());
                }
                if let Some(bad) = offsets.iter().find(|o| !o.is_finite()) {
                    return Err(format!("harmony offset {bad} is not finite"));
                }
            }
            Self::Continuous { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err("harmony range bounds must be finite".to_string());
                }
                if min > max {
                    return Err(format!("harmony range is inverted: {min} > {max}"));
                }
            }
        }
        Ok(())
    }
}

/// Synthesize one secondary candidate for `primary` from a validated band.
pub(crate) fn harmonic_candidate<R: Rng>(primary: Rgb, band: &HarmonyBand, rng: &mut R) -> Rgb {
    let base = primary.to_hsl();
    let shifted = base.shift_hue(band.sample(rng));

    let s = (base.s * SATURATION_SCALE).clamp(*SATURATION_RANGE.start(), *SATURATION_RANGE.end());

    // Light primary → dark secondary, and vice versa.
    let l: f64 = if base.l >= 0.5 {
        rng.random_range(0.15..0.40)
    } else {
        rng.random_range(0.60..0.85)
    };
    let l = l.clamp(*LIGHTNESS_RANGE.start(), *LIGHTNESS_RANGE.end());

    Hsl::new(shifted.h, s, l).to_rgb()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
