// SPDX-License-Identifier: MIT
//
// Errors raised while reading a color out of text.
//
// There is one error type for the whole crate. Arithmetic never fails: once a
// `Color` exists, every operation on it is total.

use thiserror::Error;

/// A color string that is not `RRGGBB` or `#RRGGBB`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The body after the optional `#` is not exactly six characters.
    #[error("color '{input}' has {len} digits, expected 6")]
    Length { input: String, len: usize },

    /// A channel pair contains something other than two hex digits.
    #[error("'{pair}' is not a hex byte")]
    Digit { pair: String },
}

/// Result alias for color parsing.
pub type Result<T> = std::result::Result<T, FormatError>;
