// SPDX-License-Identifier: MIT
//
// HSL (hue, saturation, lightness) — the cylindrical view of sRGB used for
// harmonic hue shifts.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m) are the
// standard convention for these formulas.
#![allow(clippy::many_single_char_names)]
//
// HSL is never stored. It is derived from an `Rgb`, adjusted, and converted
// back. Hue is rounded to whole degrees on the way in, so the round trip is
// lossy by a couple of channel units at most.

use std::fmt;

use crate::rgb::Rgb;

/// A color in HSL form.
///
/// - `h`: hue in degrees, `[0, 360)`
/// - `s`: saturation, `[0, 1]`
/// - `l`: lightness, `[0, 1]`
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Convert back to 8-bit RGB.
    ///
    /// Hue is wrapped into `[0, 360)` and saturation/lightness are clamped
    /// into `[0, 1]` first, so every input maps to a valid color.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl fmt::Debug for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hsl({:.1}, {:.4}, {:.4})", self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(c: Rgb) -> Self {
        rgb_to_hsl(c)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

pub(crate) fn rgb_to_hsl(c: Rgb) -> Hsl {
    let max_c = c.r.max(c.g).max(c.b);
    let min_c = c.r.min(c.g).min(c.b);
    let (r, g, b) = c.to_unit();
    let max = f64::from(max_c) / 255.0;
    let min = f64::from(min_c) / 255.0;
    let l = (max + min) / 2.0;

    if max_c == min_c {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = (d / (1.0 - 2.0f64.mul_add(l, -1.0).abs())).clamp(0.0, 1.0);

    // `%` keeps the dividend's sign; negatives are folded in below.
    let sector = if max_c == c.r {
        ((g - b) / d) % 6.0
    } else if max_c == c.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // `+ 0.0` turns a rounded `-0.0` into `0.0`.
    let mut h = (sector * 60.0).round() + 0.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsl::new(normalize_hue(h), s, l)
}

pub(crate) fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match sector_of(h) {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_u8(r1 + m), to_u8(g1 + m), to_u8(b1 + m))
}

/// Index of the 60° sector containing `h` (already in `[0, 360)`).
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sector_of(h: f64) -> u8 {
    // Safe: h is in [0, 360), so h / 60 floors to 0..=5.
    ((h / 60.0).floor() as u8).min(5)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn assert_hsl_close(actual: Hsl, h: f64, s: f64, l: f64) {
        assert!(
            approx_eq(actual.h, h, 1e-9) && approx_eq(actual.s, s, 1e-3) && approx_eq(actual.l, l, 1e-3),
            "expected Hsl({h}, {s}, {l}), got {actual:?}"
        );
    }

    fn channel_distance(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    // ── RGB → HSL ───────────────────────────────────────────────────

    #[test]
    fn pure_red_to_hsl() {
        assert_hsl_close(Rgb::new(255, 0, 0).to_hsl(), 0.0, 1.0, 0.5);
    }

    #[test]
    fn pure_green_to_hsl() {
        assert_hsl_close(Rgb::new(0, 255, 0).to_hsl(), 120.0, 1.0, 0.5);
    }

    #[test]
    fn pure_blue_to_hsl() {
        assert_hsl_close(Rgb::new(0, 0, 255).to_hsl(), 240.0, 1.0, 0.5);
    }

    #[test]
    fn magenta_wraps_negative_hue() {
        // Red is max and b > g, so the raw sector is negative.
        assert_hsl_close(Rgb::new(255, 0, 128).to_hsl(), 330.0, 1.0, 0.5);
    }

    #[test]
    fn near_red_hue_is_positive_zero() {
        // Red is max and b exceeds g by one step: the raw hue rounds to -0.
        let hsl = Rgb::new(255, 0, 1).to_hsl();
        assert_eq!(hsl.h.to_bits(), 0.0f64.to_bits(), "{hsl:?}");
        assert!(!format!("{hsl:?}").contains("-0"), "{hsl:?}");
    }

    #[test]
    fn gray_is_achromatic() {
        let hsl = Rgb::new(128, 128, 128).to_hsl();
        assert_hsl_close(hsl, 0.0, 0.0, 0.502);
    }

    #[test]
    fn black_and_white_lightness() {
        assert_hsl_close(Rgb::BLACK.to_hsl(), 0.0, 0.0, 0.0);
        assert_hsl_close(Rgb::WHITE.to_hsl(), 0.0, 0.0, 1.0);
    }

    #[test]
    fn hue_is_whole_degrees() {
        let hsl = Rgb::new(0x20, 0x27, 0x48).to_hsl();
        assert!(approx_eq(hsl.h, hsl.h.round(), 1e-12), "hue not rounded: {hsl:?}");
        assert!((0.0..360.0).contains(&hsl.h));
    }

    // ── HSL → RGB ───────────────────────────────────────────────────

    #[test]
    fn red_from_hsl() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn every_sector_primary() {
        assert_eq!(Hsl::new(60.0, 1.0, 0.5).to_rgb(), Rgb::new(255, 255, 0));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(180.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 255, 255));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl::new(300.0, 1.0, 0.5).to_rgb(), Rgb::new(255, 0, 255));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(Hsl::new(200.0, 0.0, 0.5).to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn out_of_range_inputs_are_tamed() {
        assert_eq!(Hsl::new(360.0, 1.0, 0.5).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(-120.0, 1.0, 0.5).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl::new(0.0, 2.0, 1.5).to_rgb(), Rgb::WHITE);
        assert_eq!(Hsl::new(0.0, -1.0, -0.5).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn shift_hue_wraps() {
        let hsl = Hsl::new(300.0, 0.5, 0.5).shift_hue(180.0);
        assert!(approx_eq(hsl.h, 120.0, 1e-9), "{hsl:?}");
        let hsl = Hsl::new(10.0, 0.5, 0.5).shift_hue(-30.0);
        assert!(approx_eq(hsl.h, 340.0, 1e-9), "{hsl:?}");
    }

    // ── Round trip ──────────────────────────────────────────────────

    #[test]
    fn roundtrip_is_close() {
        for packed in (0..=Rgb::MAX_U24).step_by(0x01_07_0B) {
            let c = Rgb::from_u24(packed);
            let back = c.to_hsl().to_rgb();
            assert!(
                channel_distance(c, back) <= 3,
                "{c} -> {:?} -> {back}",
                c.to_hsl()
            );
        }
    }

    #[test]
    fn from_impls_agree() {
        let c = Rgb::new(12, 200, 99);
        let hsl: Hsl = c.into();
        assert_eq!(hsl, c.to_hsl());
        let back: Rgb = hsl.into();
        assert_eq!(back, hsl.to_rgb());
    }
}
