//! Placeholder keys.
//!
//! Every bind variable in a statement is identified by a [`Placeholder`].
//! Positional forms (`?`, `?N`, `:N`) share the integer key space, named forms
//! (`:word`, `:word:`) use the word itself.

use std::fmt;

/// The key of a bind variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// A positional placeholder, either auto-numbered or explicitly indexed.
    Index(i64),
    /// A named placeholder.
    Name(String),
}

/// Writes the bare key: the index digits or the name, without the leading `:`.
impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Placeholder {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Placeholder {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<u32> for Placeholder {
    fn from(index: u32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<&str> for Placeholder {
    fn from(name: &str) -> Self {
        Self::Name(String::from(name))
    }
}

impl From<String> for Placeholder {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&Placeholder> for Placeholder {
    fn from(key: &Placeholder) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_key() {
        assert_eq!(Placeholder::Index(12).to_string(), "12");
        assert_eq!(Placeholder::from("spouse").to_string(), "spouse");
    }

    #[test]
    fn test_digit_names_stay_names() {
        // Only the scanner turns all-digit words into indexes.
        assert_eq!(Placeholder::from("12"), Placeholder::Name(String::from("12")));
        assert_ne!(Placeholder::from("12"), Placeholder::from(12));
    }
}
