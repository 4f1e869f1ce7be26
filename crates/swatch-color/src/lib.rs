// SPDX-License-Identifier: MIT
//
// swatch-color — color values for swatch.
//
// Two representations and nothing else: `Rgb` (8-bit sRGB, printed as
// uppercase `#RRGGBB`) and `Hsl` (derived, used for hue rotation). Parsing
// is strict: six hex digits, optional leading `#`, no shorthand, no alpha.
// Anything looser belongs in the UI layer that collects the input.

pub mod error;
pub mod hsl;
pub mod rgb;

pub use error::ColorError;
pub use hsl::Hsl;
pub use rgb::Rgb;
