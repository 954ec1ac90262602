//! SQL statement scanner.
//!
//! The scanner walks the source once, trying a fixed list of matchers at each
//! position. The first statement is turned into tokens; the text after its
//! terminating `;` is returned untouched as the trailing remainder.

use tracing::trace;

use super::{Keyword, Span, Token};
use crate::error::{Result, ScanError};
use crate::placeholder::Placeholder;

/// Operator and punctuation characters that may appear inside a text run.
const RUN_PUNCTUATION: &str = "+-*/=<>!(),.";

/// Returns true for characters that make up words (identifiers, numbers,
/// keywords and placeholder names).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true for characters that extend a text run.
fn is_run_char(c: char) -> bool {
    is_word_char(c) || RUN_PUNCTUATION.contains(c)
}

/// A single-pass scanner over one SQL source string.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// The last positional index handed out or set explicitly.
    last_index: i64,
    /// Set while inside `BEGIN ... END`, where `;` does not end the statement.
    in_block: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            last_index: 0,
            in_block: false,
        }
    }

    /// Scans the first statement of the input.
    ///
    /// Returns the raw (unmerged) token list and the text following the
    /// statement's terminating `;`, which is empty when the input holds a
    /// single statement.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] when no rule matches at some position, when a
    /// quoted literal is never closed, or when a placeholder index overflows.
    pub fn scan(mut self) -> Result<(Vec<Token>, String)> {
        let mut tokens = Vec::new();

        loop {
            if self.skip_whitespace() && !tokens.is_empty() {
                tokens.push(Token::space());
            }
            self.start = self.pos;

            let Some(c) = self.peek() else {
                break;
            };

            if c == ';' {
                self.advance();
                if !self.in_block {
                    break;
                }
                tokens.push(Token::text(";"));
                continue;
            }

            if let Some(token) = self.scan_keyword() {
                tokens.push(token);
                continue;
            }

            if self.skip_comment() {
                continue;
            }

            let token = match c {
                c if is_run_char(c) => self.scan_run(),
                '\'' | '"' => self.scan_literal(c)?,
                '?' => self.scan_positional()?,
                ':' => self.scan_named()?,
                _ => return Err(self.unrecognized()),
            };
            tokens.push(token);
        }

        while tokens.last().is_some_and(Token::is_space) {
            tokens.pop();
        }

        Ok((tokens, self.input[self.pos..].to_owned()))
    }

    /// Returns the unconsumed input.
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advances while `pred` holds for the current character.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Skips a run of whitespace, returning whether anything was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let before = self.pos;
        self.advance_while(char::is_whitespace);
        self.pos > before
    }

    /// Returns true if no word character precedes the current position.
    fn at_word_start(&self) -> bool {
        !self.input[..self.pos]
            .chars()
            .next_back()
            .is_some_and(is_word_char)
    }

    /// Matches `keyword` (case-insensitive, word-bounded on the right) at byte
    /// offset `at`, returning the offset just past it.
    fn match_keyword(&self, at: usize, keyword: Keyword) -> Option<usize> {
        let end = at + keyword.as_str().len();
        let candidate = self.input.get(at..end)?;
        if Keyword::from_str(candidate) != Some(keyword) {
            return None;
        }
        let bounded = !self.input[end..].chars().next().is_some_and(is_word_char);
        bounded.then_some(end)
    }

    /// Returns the offset of the first non-whitespace character at or after
    /// `at`.
    fn skip_whitespace_from(&self, at: usize) -> usize {
        let rest = &self.input[at..];
        at + (rest.len() - rest.trim_start().len())
    }

    /// Recognizes `BEGIN TRANSACTION`, a block-opening `BEGIN`, or the `END`
    /// closing an open block.
    fn scan_keyword(&mut self) -> Option<Token> {
        if !self.at_word_start() {
            return None;
        }

        if let Some(end) = self.match_keyword(self.pos, Keyword::Begin) {
            let next = self.skip_whitespace_from(end);
            if next > end {
                if let Some(after) = self.match_keyword(next, Keyword::Transaction) {
                    self.pos = after;
                    return Some(Token::text("begin transaction"));
                }
            }

            // A block opens unless `BEGIN` stands alone before `;`.
            let opens_block = self.input[next..].chars().next() != Some(';');
            if !opens_block {
                return None;
            }
            self.pos = end;
            self.in_block = true;
            trace!(offset = self.start, "BEGIN block opened");
            return Some(Keyword::Begin.into());
        }

        if self.in_block {
            if let Some(end) = self.match_keyword(self.pos, Keyword::End) {
                self.pos = end;
                self.in_block = false;
                trace!(offset = self.start, "BEGIN block closed");
                return Some(Keyword::End.into());
            }
        }

        None
    }

    /// Skips a `---` line comment or a closed `/* ... */` block comment.
    fn skip_comment(&mut self) -> bool {
        let rest = self.rest();

        if rest.starts_with("---") {
            self.pos += rest.find('\n').unwrap_or(rest.len());
            return true;
        }

        if let Some(body) = rest.strip_prefix("/*") {
            if let Some(close) = body.find("*/") {
                self.pos += "/*".len() + close + "*/".len();
                return true;
            }
        }

        false
    }

    /// Scans a maximal run of word and operator characters.
    fn scan_run(&mut self) -> Token {
        self.advance_while(is_run_char);
        Token::text(&self.input[self.start..self.pos])
    }

    /// Scans a quoted literal. A doubled delimiter is an escaped delimiter and
    /// does not end the literal.
    fn scan_literal(&mut self, delimiter: char) -> Result<Token> {
        self.advance(); // consume opening delimiter

        loop {
            match self.advance() {
                Some(c) if c == delimiter => {
                    if self.peek() == Some(delimiter) {
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {}
                None => {
                    return Err(ScanError::UnterminatedLiteral {
                        delimiter,
                        span: self.make_span(),
                    });
                }
            }
        }

        Ok(Token::text(&self.input[self.start..self.pos]))
    }

    /// Scans `?` or `?N`.
    fn scan_positional(&mut self) -> Result<Token> {
        self.advance(); // consume ?
        let digits_start = self.pos;
        self.advance_while(|c| c.is_ascii_digit());

        let index = if self.pos == digits_start {
            self.last_index
                .checked_add(1)
                .ok_or_else(|| self.invalid_index(digits_start))?
        } else {
            self.parse_index(digits_start)?
        };

        self.last_index = index;
        Ok(Token::Bind(Placeholder::Index(index)))
    }

    /// Scans `:word` or `:word:`. An all-digit word is a positional index.
    fn scan_named(&mut self) -> Result<Token> {
        self.advance(); // consume :
        let word_start = self.pos;
        self.advance_while(is_word_char);
        if self.pos == word_start {
            return Err(self.unrecognized());
        }
        let word_end = self.pos;
        if self.peek() == Some(':') {
            self.advance();
        }

        let word = &self.input[word_start..word_end];
        if word.chars().all(|c| c.is_ascii_digit()) {
            let index = word
                .parse::<i64>()
                .map_err(|_| self.invalid_index(word_start))?;
            self.last_index = index;
            Ok(Token::Bind(Placeholder::Index(index)))
        } else {
            Ok(Token::Bind(Placeholder::Name(String::from(word))))
        }
    }

    /// Parses the digits between `digits_start` and the cursor.
    fn parse_index(&self, digits_start: usize) -> Result<i64> {
        self.input[digits_start..self.pos]
            .parse()
            .map_err(|_| self.invalid_index(digits_start))
    }

    fn invalid_index(&self, digits_start: usize) -> ScanError {
        ScanError::InvalidIndex {
            digits: self.input[digits_start..self.pos].to_owned(),
            span: self.make_span(),
        }
    }

    fn unrecognized(&self) -> ScanError {
        ScanError::UnrecognizedInput {
            rest: self.input[self.start..].to_owned(),
            span: Span::new(self.start, self.input.len()),
        }
    }
}
