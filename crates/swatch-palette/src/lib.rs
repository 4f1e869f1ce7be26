//! # swatch-palette — readable two-color palettes
//!
//! Generates a primary color that carries black or white text at every
//! WCAG level, plus a harmonically related secondary, and reports how both
//! hold up.
//!
//! # Architecture
//!
//! ```text
//! random 24-bit color
//!     │
//!     ▼
//! accessibility.rs: best text color + WCAG levels  ──► reject / accept primary
//!     │
//!     ▼
//! harmony.rs:       hue-shifted HSL candidate
//!     │
//!     ▼
//! generator.rs:     SecondaryStrategy decides (self-readable | contrast-to-primary)
//!     │
//!     ▼
//! palette.rs:       Palette + PaletteReport for the UI to paint
//! ```
//!
//! `contrast.rs` holds the luminance math everything above depends on.
//! `api.rs` wraps the lot in hex-string functions.
//!
//! The crate is stateless apart from each generator's RNG. Every sampling
//! loop is bounded by [`GeneratorConfig`].

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod accessibility;
pub mod api;
pub mod config;
pub mod contrast;
pub mod error;
pub mod generator;
pub mod harmony;
pub mod palette;

pub use accessibility::{TextChoice, WcagPasses, best_text_color, wcag_passes};
pub use config::{ConfigError, GeneratorConfig};
pub use contrast::{contrast_ratio, relative_luminance};
pub use error::{Error, Result, Stage};
pub use generator::{PaletteGenerator, SecondaryStrategy};
pub use harmony::HarmonyBand;
pub use palette::{ColorReport, Palette, PaletteReport};
