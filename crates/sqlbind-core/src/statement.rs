//! Parsed statements.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::bind::{BindArg, BindSlot, BindStore};
use crate::error::{Result, ScanError};
use crate::lexer::{Lexer, Token, optimize};
use crate::placeholder::Placeholder;
use crate::value::SqlValue;

/// A tokenized SQL statement that can be bound and rendered repeatedly.
///
/// Scanning happens once, in [`ParsedStatement::parse`]. Binding only updates
/// the bind store, and rendering walks the stored tokens.
///
/// ```rust
/// use sqlbind_core::ParsedStatement;
///
/// let mut stmt = ParsedStatement::parse("select * from t where a = ? and b = :b")?;
/// stmt.bind_param(1, 42);
/// stmt.bind_param("b", "it's");
/// assert_eq!(stmt.sql(), "select * from t where a = :1 and b = :b");
/// assert_eq!(stmt.render(), "select * from t where a = 42 and b = 'it''s'");
/// # Ok::<(), sqlbind_core::ScanError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStatement {
    tokens: Vec<Token>,
    trailing: String,
    binds: BindStore,
}

impl ParsedStatement {
    /// Scans the first statement in `sql`.
    ///
    /// Any text after the statement's terminating `;` is kept, unscanned, as
    /// [`trailing`](Self::trailing).
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if the statement contains input the scanner
    /// does not recognize or an unterminated quoted literal.
    pub fn parse(sql: &str) -> Result<Self> {
        let (tokens, trailing) = Lexer::new(sql).scan()?;
        let tokens = optimize(tokens);
        let binds = BindStore::seeded(tokens.iter().filter_map(Token::placeholder));

        trace!(
            tokens = tokens.len(),
            placeholders = binds.len(),
            trailing = trailing.len(),
            "Scanned statement"
        );

        Ok(Self {
            tokens,
            trailing,
            binds,
        })
    }

    /// Returns the optimized token list.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the distinct placeholder keys of the statement, indexes first.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.binds.keys()
    }

    /// Returns the binding state of `key`, or `None` for an unknown key.
    #[must_use]
    pub fn binding(&self, key: &Placeholder) -> Option<&BindSlot> {
        self.binds.get(key)
    }

    /// Returns the text following the statement's terminating `;`.
    #[must_use]
    pub fn trailing(&self) -> &str {
        &self.trailing
    }

    /// Returns the trailing text with surrounding whitespace removed; the
    /// start of the next statement in a script.
    #[must_use]
    pub fn remainder(&self) -> &str {
        self.trailing.trim()
    }

    /// Binds `value` to the placeholder `key`.
    ///
    /// Keys the statement does not contain are ignored. Returns whether the
    /// key was known.
    pub fn bind_param(
        &mut self,
        key: impl Into<Placeholder>,
        value: impl Into<SqlValue>,
    ) -> bool {
        let key = key.into();
        let known = self.binds.set(&key, value.into());
        if !known {
            debug!(placeholder = %key, "Ignoring bind to unknown placeholder");
        }
        known
    }

    /// Binds a list of arguments.
    ///
    /// Positional arguments bind indexes 1, 2, 3, ... in order. A
    /// [`BindArg::Named`] argument binds each of its entries by key and does
    /// not advance the positional index.
    ///
    /// ```rust
    /// use sqlbind_core::{BindArg, ParsedStatement, bind_args};
    ///
    /// let mut stmt = ParsedStatement::parse(":name and ? and ?")?;
    /// stmt.bind_params(bind_args!["one", BindArg::named([("name", "joe")]), 2]);
    /// assert_eq!(stmt.render(), "'joe' and 'one' and 2");
    /// # Ok::<(), sqlbind_core::ScanError>(())
    /// ```
    pub fn bind_params<I>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<BindArg>,
    {
        let mut index: i64 = 1;
        for arg in args {
            match arg.into() {
                BindArg::Positional(value) => {
                    self.bind_param(index, value);
                    index += 1;
                }
                BindArg::Named(entries) => {
                    for (key, value) in entries {
                        self.bind_param(key, value);
                    }
                }
            }
        }
        self
    }

    /// Returns every placeholder to the unbound state.
    pub fn reset(&mut self) {
        self.binds.clear();
    }

    /// Returns the canonical SQL: the statement with every placeholder
    /// written as `:key`, whatever syntax it was written in.
    #[must_use]
    pub fn sql(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            token.write_canonical(&mut out);
        }
        out
    }

    /// Returns the statement with every placeholder replaced by its bound
    /// value as a SQL literal, or `NULL` when unbound.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParsedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Text(text) => f.write_str(text)?,
                Token::Bind(key) => match self.binds.get(key) {
                    Some(slot) => write!(f, "{slot}")?,
                    None => f.write_str("NULL")?,
                },
            }
        }
        Ok(())
    }
}

impl FromStr for ParsedStatement {
    type Err = ScanError;

    fn from_str(sql: &str) -> Result<Self> {
        Self::parse(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> ParsedStatement {
        ParsedStatement::parse(sql)
            .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
    }

    #[test]
    fn test_tokens_are_optimized() {
        let stmt = parse("select a ,  b from t where c = ? -- x");
        assert_eq!(
            stmt.tokens(),
            &[
                Token::text("select a , b from t where c = "),
                Token::bind(1),
                Token::text(" -- x"),
            ]
        );
    }

    #[test]
    fn test_store_matches_tokens() {
        let stmt = parse("? and :a and ?1 and :a:");
        let mut from_tokens: Vec<&Placeholder> =
            stmt.tokens().iter().filter_map(Token::placeholder).collect();
        from_tokens.sort();
        from_tokens.dedup();
        assert_eq!(stmt.placeholders().collect::<Vec<_>>(), from_tokens);
    }

    #[test]
    fn test_bind_param_reports_unknown_keys() {
        let mut stmt = parse("? and :name");
        assert!(stmt.bind_param(1, "x"));
        assert!(stmt.bind_param("name", "y"));
        assert!(!stmt.bind_param(2, "z"));
        assert!(!stmt.bind_param("other", "z"));
        assert_eq!(stmt.render(), "'x' and 'y'");
    }

    #[test]
    fn test_rebinding_overwrites() {
        let mut stmt = parse("x = ?");
        stmt.bind_param(1, 1);
        assert_eq!(stmt.render(), "x = 1");
        stmt.bind_param(1, "two");
        assert_eq!(stmt.render(), "x = 'two'");
        stmt.bind_param(1, SqlValue::Null);
        assert_eq!(stmt.render(), "x = NULL");
    }

    #[test]
    fn test_reset() {
        let mut stmt = parse("x = ?");
        stmt.bind_param(1, 1);
        stmt.reset();
        assert_eq!(stmt.render(), "x = NULL");
        assert_eq!(stmt.binding(&Placeholder::from(1)), Some(&BindSlot::Unbound));
    }

    #[test]
    fn test_remainder_is_trimmed() {
        let stmt = parse("a;  \n b; c ");
        assert_eq!(stmt.trailing(), "  \n b; c ");
        assert_eq!(stmt.remainder(), "b; c");
    }

    #[test]
    fn test_from_str() {
        let stmt: ParsedStatement = "select ?".parse().unwrap();
        assert_eq!(stmt.sql(), "select :1");
        assert!("select 'x".parse::<ParsedStatement>().is_err());
    }

    #[test]
    fn test_non_text_values_are_not_quoted() {
        let mut stmt = parse("values (?, ?, ?, ?)");
        stmt.bind_params(crate::bind_args![true, 2.5, vec![0xAB_u8], -3]);
        assert_eq!(stmt.render(), "values (TRUE, 2.5, X'AB', -3)");
    }
}
