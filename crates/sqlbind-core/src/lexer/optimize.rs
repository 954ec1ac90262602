//! Token list compaction.

use super::Token;

/// Merges every run of adjacent text tokens into a single token.
///
/// Bind variables are kept as they are and break merging on both sides, so
/// the result alternates between at most one text run and bind variables.
/// Concatenating the output renders exactly like concatenating the input.
#[must_use]
pub fn optimize(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Token::Text(text) = &token {
            if let Some(Token::Text(run)) = merged.last_mut() {
                run.push_str(text);
                continue;
            }
        }
        merged.push(token);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Token {
        Token::text(s)
    }

    #[test]
    fn test_empty() {
        assert!(optimize(vec![]).is_empty());
    }

    #[test]
    fn test_merges_text_runs() {
        let tokens = vec![text("select"), text(" "), text("*"), text(" "), text("from t")];
        assert_eq!(optimize(tokens), vec![text("select * from t")]);
    }

    #[test]
    fn test_bind_variables_break_runs() {
        let tokens = vec![
            text("a"),
            text(" "),
            text("="),
            text(" "),
            Token::bind(1),
            Token::bind("name"),
            text(" "),
            text("and"),
            text(" "),
            Token::bind(2),
        ];
        assert_eq!(
            optimize(tokens),
            vec![
                text("a = "),
                Token::bind(1),
                Token::bind("name"),
                text(" and "),
                Token::bind(2),
            ]
        );
    }

    #[test]
    fn test_canonical_text_unchanged() {
        let tokens = vec![text("x"), text(" "), Token::bind(3), text(";"), text(" end")];
        let canonical = |tokens: &[Token]| {
            let mut out = String::new();
            for token in tokens {
                token.write_canonical(&mut out);
            }
            out
        };
        let before = canonical(&tokens);
        assert_eq!(canonical(&optimize(tokens)), before);
    }
}
