//! Scan error types.

use thiserror::Error;

use crate::lexer::Span;

/// Errors raised while scanning a SQL statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// No scanner rule matches the input at `span.start`.
    #[error("unknown token {rest:?} at {span}")]
    UnrecognizedInput {
        /// The unconsumed input, starting at the offending character.
        rest: String,
        /// Location of the unconsumed input.
        span: Span,
    },

    /// A quoted literal has no closing delimiter.
    #[error("unterminated {delimiter} literal at {span}")]
    UnterminatedLiteral {
        /// The opening delimiter (`'` or `"`).
        delimiter: char,
        /// From the opening delimiter to the end of input.
        span: Span,
    },

    /// A placeholder index does not fit the index type.
    #[error("placeholder index {digits} out of range at {span}")]
    InvalidIndex {
        /// The digits as written.
        digits: String,
        /// Location of the placeholder.
        span: Span,
    },
}

impl ScanError {
    /// Returns the location of the error in the source.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnrecognizedInput { span, .. }
            | Self::UnterminatedLiteral { span, .. }
            | Self::InvalidIndex { span, .. } => *span,
        }
    }
}

/// Result type for scanning operations.
pub type Result<T> = std::result::Result<T, ScanError>;
