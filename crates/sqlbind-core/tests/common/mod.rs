#![allow(dead_code)]

use sqlbind_core::{ParsedStatement, Placeholder, ScanError};

pub fn parse(sql: &str) -> ParsedStatement {
    ParsedStatement::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql:?}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ScanError {
    ParsedStatement::parse(sql).expect_err(&format!("Expected scan error for: {sql:?}"))
}

pub fn placeholders(stmt: &ParsedStatement) -> Vec<Placeholder> {
    stmt.placeholders().cloned().collect()
}
