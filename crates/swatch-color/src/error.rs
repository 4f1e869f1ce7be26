// SPDX-License-Identifier: MIT
//
// Errors raised while turning user-supplied text into colors.

use thiserror::Error;

/// A color could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not six hex digits, optionally prefixed with `#`.
    #[error("invalid hex color {input:?}: expected 6 hex digits, optionally prefixed with '#'")]
    InvalidFormat { input: String },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
        }
    }
}
