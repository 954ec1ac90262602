//! SQL statement scanner.
//!
//! This module turns raw SQL source into a compact stream of text runs and
//! bind variables, plus the text trailing the first statement.

mod optimize;
mod span;
mod token;
mod tokenizer;

pub use optimize::optimize;
pub use span::Span;
pub use token::{Keyword, Token};
pub use tokenizer::Lexer;
