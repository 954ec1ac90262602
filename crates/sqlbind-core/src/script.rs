//! Multi-statement scripts.
//!
//! A script is consumed one statement at a time: each statement is parsed
//! from the remainder left by the previous one.

use std::iter::FusedIterator;

use crate::bind::BindArg;
use crate::error::Result;
use crate::statement::ParsedStatement;

/// An iterator over the statements of a `;`-separated script.
///
/// The first statement is always produced, even for empty input. Iteration
/// stops once a statement leaves no remainder, or after the first scan error.
///
/// ```rust
/// use sqlbind_core::Script;
///
/// let sql: Vec<String> = Script::new("create table t (a); insert into t values (?);")
///     .map(|stmt| stmt.map(|stmt| stmt.sql()))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(sql, ["create table t (a)", "insert into t values (:1)"]);
/// # Ok::<(), sqlbind_core::ScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Script {
    pending: Option<String>,
}

impl Script {
    /// Creates a script over `sql`.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            pending: Some(sql.into()),
        }
    }

    /// Parses every statement and applies the same arguments to each.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError`](crate::ScanError) raised by any
    /// statement.
    pub fn bind_all(self, args: &[BindArg]) -> Result<Vec<ParsedStatement>> {
        self.map(|stmt| {
            let mut stmt = stmt?;
            stmt.bind_params(args.iter().cloned());
            Ok(stmt)
        })
        .collect()
    }
}

impl Iterator for Script {
    type Item = Result<ParsedStatement>;

    fn next(&mut self) -> Option<Self::Item> {
        let sql = self.pending.take()?;
        let stmt = match ParsedStatement::parse(&sql) {
            Ok(stmt) => stmt,
            Err(e) => return Some(Err(e)),
        };

        let rest = stmt.remainder();
        if !rest.is_empty() {
            self.pending = Some(rest.to_owned());
        }
        Some(Ok(stmt))
    }
}

impl FusedIterator for Script {}
