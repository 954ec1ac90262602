//! Token types produced by the scanner.

use crate::placeholder::Placeholder;

/// Keywords the scanner gives special meaning to.
///
/// Everything else in a statement is opaque text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Opens a compound block (trigger bodies and the like).
    Begin,
    /// Closes the block opened by `BEGIN`.
    End,
    /// Follows `BEGIN` in a transaction statement.
    Transaction,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        [Self::Begin, Self::End, Self::Transaction]
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(s))
    }

    /// Returns the normalized (lowercase) spelling the scanner emits.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::End => "end",
            Self::Transaction => "transaction",
        }
    }
}

/// A piece of a scanned statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal SQL text, emitted unchanged.
    Text(String),
    /// A bind variable marker.
    Bind(Placeholder),
}

impl Token {
    /// Creates a text token.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a bind token for the given key.
    #[must_use]
    pub fn bind(key: impl Into<Placeholder>) -> Self {
        Self::Bind(key.into())
    }

    /// The single space that stands in for a run of whitespace.
    #[must_use]
    pub(crate) fn space() -> Self {
        Self::text(" ")
    }

    /// Returns true if this is the collapsed-whitespace token.
    #[must_use]
    pub fn is_space(&self) -> bool {
        matches!(self, Self::Text(text) if text == " ")
    }

    /// Returns the placeholder key of a bind token.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            Self::Bind(key) => Some(key),
            Self::Text(_) => None,
        }
    }

    /// Appends the canonical form of this token to `out`: text as-is, bind
    /// variables as `:key`.
    pub fn write_canonical(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Bind(key) => {
                out.push(':');
                out.push_str(&key.to_string());
            }
        }
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        Self::text(keyword.as_str())
    }
}
