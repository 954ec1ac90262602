//! Values that can be bound to placeholders.
//!
//! Binding is purely textual: a bound value is written into the statement as a
//! SQL literal when the statement is rendered.

use std::fmt;

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value, rendered as a quoted string literal.
    Text(String),
    /// Binary blob value, rendered as a hex literal.
    Blob(Vec<u8>),
}

/// Escapes `text` for use inside a single-quoted SQL literal by doubling every
/// single quote. No delimiters are added.
#[must_use]
pub fn quote(text: &str) -> String {
    text.replace('\'', "''")
}

/// Writes the value as an inline SQL literal.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(true) => f.write_str("TRUE"),
            Self::Bool(false) => f.write_str("FALSE"),
            Self::Int(n) => write!(f, "{n}"),
            // SQL has no literal for NaN or infinity.
            Self::Float(x) if !x.is_finite() => f.write_str("NULL"),
            // Debug keeps the fractional part, so 1.0 stays a float literal.
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => write!(f, "'{}'", quote(s)),
            Self::Blob(bytes) => {
                f.write_str("X'")?;
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                f.write_str("'")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(n: $ty) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for SqlValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for SqlValue {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::Text(String::from(s))
    }
}

impl From<&String> for SqlValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Blob(bytes)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Blob(bytes.to_vec())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_null() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::from(None::<&str>).to_string(), "NULL");
    }

    #[test]
    fn test_inline_bool() {
        assert_eq!(SqlValue::Bool(true).to_string(), "TRUE");
        assert_eq!(SqlValue::Bool(false).to_string(), "FALSE");
    }

    #[test]
    fn test_inline_numbers() {
        assert_eq!(SqlValue::from(42).to_string(), "42");
        assert_eq!(SqlValue::from(-100_i64).to_string(), "-100");
        assert_eq!(SqlValue::from(2.5).to_string(), "2.5");
        assert_eq!(SqlValue::from(1.0).to_string(), "1.0");
    }

    #[test]
    fn test_inline_non_finite_float() {
        assert_eq!(SqlValue::from(f64::NAN).to_string(), "NULL");
        assert_eq!(SqlValue::from(f64::INFINITY).to_string(), "NULL");
        assert_eq!(SqlValue::from(f32::NEG_INFINITY).to_string(), "NULL");
    }

    #[test]
    fn test_inline_text_escaping() {
        assert_eq!(SqlValue::from("hello").to_string(), "'hello'");
        assert_eq!(SqlValue::from("O'Reilly").to_string(), "'O''Reilly'");
        assert_eq!(
            SqlValue::from("'; DROP TABLE users; --").to_string(),
            "'''; DROP TABLE users; --'"
        );
    }

    #[test]
    fn test_inline_blob() {
        assert_eq!(
            SqlValue::from(vec![0x48_u8, 0x45, 0x4C, 0x4C, 0x4F]).to_string(),
            "X'48454C4C4F'"
        );
        assert_eq!(SqlValue::Blob(vec![]).to_string(), "X''");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("it's"), "it''s");
        assert_eq!(quote("''"), "''''");
        assert_eq!(quote("plain"), "plain");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(SqlValue::from(Some(7_u8)), SqlValue::Int(7));
        assert_eq!(
            SqlValue::from(String::from("x")),
            SqlValue::Text(String::from("x"))
        );
        assert_eq!(SqlValue::from(&b"ab"[..]), SqlValue::Blob(vec![b'a', b'b']));
    }
}
