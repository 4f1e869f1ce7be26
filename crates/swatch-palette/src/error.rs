//! Error types for swatch-palette.

use std::fmt;

use swatch_color::ColorError;
use thiserror::Error;

use crate::config::ConfigError;

/// Which rejection-sampling loop ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Primary,
    Secondary,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A hex string from the caller could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// No acceptable candidate within the attempt cap.
    #[error("{stage} color search found no readable color in {attempts} attempts")]
    GenerationExhausted { stage: Stage, attempts: usize },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_message_names_stage() {
        let err = Error::GenerationExhausted {
            stage: Stage::Primary,
            attempts: 10,
        };
        assert_eq!(
            err.to_string(),
            "primary color search found no readable color in 10 attempts"
        );
    }

    #[test]
    fn color_errors_pass_through() {
        let err: Error = swatch_color::Rgb::from_hex("#12").unwrap_err().into();
        assert!(matches!(err, Error::Color(ColorError::InvalidFormat { .. })));
        assert!(err.to_string().starts_with("invalid hex color"));
    }
}
