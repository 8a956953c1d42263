//! Error types for date formatting.

use thiserror::Error;

/// Errors raised while rendering a value under a format specifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The pattern contains a letter sequence the engine does not understand.
    #[error("unknown format token '{token}' in pattern '{pattern}'")]
    UnknownToken {
        /// The offending token.
        token: String,
        /// The full pattern being rendered.
        pattern: String,
    },

    /// A `[` literal escape was opened but never closed.
    #[error("unterminated literal in pattern '{pattern}'")]
    UnterminatedLiteral {
        /// The full pattern being rendered.
        pattern: String,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
