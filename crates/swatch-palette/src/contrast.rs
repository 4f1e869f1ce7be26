//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Works directly on 8-bit sRGB channels: normalize, linearize, weight.
//! The linearization knee is the WCAG 2.0 constant 0.03928 and the offset
//! is 0.055 as published.

use swatch_color::Rgb;

/// Linearize one sRGB channel in [0.0, 1.0].
#[inline]
#[must_use]
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_unit();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
