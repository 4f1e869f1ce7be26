// SPDX-License-Identifier: MIT
//
// 8-bit sRGB colors and their `#RRGGBB` text form.
//
// `Rgb` is the canonical color value in swatch. Everything else (HSL,
// luminance, contrast) is derived from it on demand and converted back
// into it. The hex form is always six uppercase digits with a leading
// `#`, so `Rgb -> hex -> Rgb` is lossless.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::hsl::{Hsl, rgb_to_hsl};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use swatch_color::Rgb;
///
/// let teal = Rgb::from_hex("#008080").unwrap();
/// assert_eq!(teal, Rgb::new(0, 128, 128));
/// assert_eq!(teal.to_hex(), "#008080");
///
/// // The leading '#' is optional and digits are case-insensitive.
/// assert_eq!(Rgb::from_hex("ff8000").unwrap().to_string(), "#FF8000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Largest packed value, `0xFFFFFF`.
    pub const MAX_U24: u32 = 0x00FF_FFFF;

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u24(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Pack into a `0xRRGGBB` integer.
    #[inline]
    #[must_use]
    pub const fn to_u24(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse `#RRGGBB` or `RRGGBB` (any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless exactly six hex digits
    /// remain after stripping one optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::invalid_format(s))
    }

    /// Format as `#RRGGBB` with uppercase digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to 0.0–1.0.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to HSL. Hue is rounded to a whole degree.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

// Colors travel through config files and JSON as their hex string.

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb::new(r, g, b))
}

const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_with_hash() {
        assert_eq!(Rgb::from_hex("#FF8000"), Ok(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(Rgb::from_hex("202748"), Ok(Rgb::new(0x20, 0x27, 0x48)));
    }

    #[test]
    fn parse_lowercase() {
        assert_eq!(Rgb::from_hex("#e9efda"), Ok(Rgb::new(0xE9, 0xEF, 0xDA)));
    }

    #[test]
    fn parse_rejects_short_form() {
        assert!(Rgb::from_hex("#FFF").is_err());
    }

    #[test]
    fn parse_rejects_alpha_form() {
        assert!(Rgb::from_hex("#FF8000FF").is_err());
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        assert!(Rgb::from_hex("#GG0000").is_err());
        assert!(Rgb::from_hex("#12345z").is_err());
    }

    #[test]
    fn parse_rejects_empty_and_bare_hash() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#").is_err());
    }

    #[test]
    fn parse_rejects_double_hash() {
        assert!(Rgb::from_hex("##FFFFF").is_err());
    }

    #[test]
    fn parse_rejects_whitespace() {
        assert!(Rgb::from_hex(" #FFFFFF").is_err());
        assert!(Rgb::from_hex("#FFFFFF ").is_err());
    }

    #[test]
    fn parse_rejects_multibyte() {
        // Six bytes, but not six hex digits.
        assert!(Rgb::from_hex("ééé").is_err());
    }

    #[test]
    fn parse_error_carries_input() {
        let err = Rgb::from_hex("#nope").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidFormat {
                input: "#nope".to_string()
            }
        );
        assert!(err.to_string().contains("#nope"));
    }

    #[test]
    fn hex_is_uppercase_and_padded() {
        assert_eq!(Rgb::new(10, 0, 171).to_hex(), "#0A00AB");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#FFFFFF");
    }

    #[test]
    fn display_matches_to_hex() {
        let c = Rgb::new(0x44, 0x9B, 0x72);
        assert_eq!(c.to_string(), c.to_hex());
    }

    #[test]
    fn hex_roundtrip_uppercases() {
        for s in ["#abcdef", "abcdef", "#C3110C", "00ff7f"] {
            let c = Rgb::from_hex(s).unwrap();
            let expected = format!("#{}", s.trim_start_matches('#').to_uppercase());
            assert_eq!(c.to_hex(), expected);
        }
    }

    #[test]
    fn from_str_parses() {
        let c: Rgb = "#449B72".parse().unwrap();
        assert_eq!(c, Rgb::new(0x44, 0x9B, 0x72));
    }

    #[test]
    fn u24_packing() {
        assert_eq!(Rgb::from_u24(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_u24(), 0x12_34_56);
        assert_eq!(Rgb::from_u24(Rgb::MAX_U24), Rgb::WHITE);
        assert_eq!(Rgb::from_u24(0xFF00_0000), Rgb::BLACK);
    }

    #[test]
    fn unit_channels() {
        let (r, g, b) = Rgb::new(255, 0, 51).to_unit();
        assert!((r - 1.0).abs() < 1e-12);
        assert!(g.abs() < 1e-12);
        assert!((b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn serde_uses_hex_string() {
        let c = Rgb::new(0x20, 0x27, 0x48);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#202748\"");
        let back: Rgb = serde_json::from_str("\"e9efda\"").unwrap();
        assert_eq!(back, Rgb::new(0xE9, 0xEF, 0xDA));
    }

    #[test]
    fn serde_rejects_bad_hex() {
        let err = serde_json::from_str::<Rgb>("\"#12\"").unwrap_err();
        assert!(err.to_string().contains("invalid hex color"));
    }

    #[test]
    fn tuple_conversions() {
        let c: Rgb = (1, 2, 3).into();
        let t: (u8, u8, u8) = c.into();
        assert_eq!(t, (1, 2, 3));
    }
}
