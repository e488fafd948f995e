// ABOUTME: Turns raw source text into a flat sequence of tokens for the reader.
// Single left-to-right pass tracking three booleans: in_string, in_comment, in_table_def.

use crate::error::EvalError;

/// Tokenizes `source` into an ordered sequence of token strings.
///
/// `(` `)` `'` and `#(` are always flushed as their own tokens; everything else
/// accumulates into the current atom until a delimiter, whitespace, or comment start.
pub fn tokenize(source: &str) -> Result<Vec<String>, EvalError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut in_comment = false;
    let mut in_table_def = false;

    let mut chars = source.chars().peekable();

    macro_rules! flush {
        () => {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        };
    }

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
            }
            continue;
        }

        if in_string {
            current.push(c);
            if c == '"' {
                tokens.push(std::mem::take(&mut current));
                in_string = false;
            }
            continue;
        }

        if in_table_def {
            // We've consumed '#'; the next non-whitespace character must be '('.
            if c.is_whitespace() {
                continue;
            }
            if c == '(' {
                tokens.push("#(".to_string());
                in_table_def = false;
                continue;
            }
            return Err(EvalError::lex("Expected table definition #("));
        }

        match c {
            '"' => {
                flush!();
                in_string = true;
                current.push(c);
            }
            ';' => {
                flush!();
                in_comment = true;
            }
            '#' => {
                flush!();
                in_table_def = true;
            }
            '\'' => {
                flush!();
                tokens.push("'".to_string());
            }
            '(' => {
                flush!();
                tokens.push("(".to_string());
            }
            ')' => {
                flush!();
                tokens.push(")".to_string());
            }
            c if c.is_whitespace() => {
                flush!();
            }
            c => current.push(c),
        }
    }

    if in_string {
        return Err(EvalError::lex("unterminated string literal"));
    }
    if in_table_def {
        return Err(EvalError::lex("Expected table definition #("));
    }
    flush!();

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_simple_list() {
        assert_eq!(
            tokenize("(+ 1 2)").unwrap(),
            vec!["(", "+", "1", "2", ")"]
        );
    }

    #[test]
    fn tokenizes_quote_sugar() {
        assert_eq!(tokenize("'(1 2)").unwrap(), vec!["'", "(", "1", "2", ")"]);
    }

    #[test]
    fn tokenizes_string_literal_with_semicolon() {
        assert_eq!(
            tokenize(r#"(print "a;b")"#).unwrap(),
            vec!["(", "print", "\"a;b\"", ")"]
        );
    }

    #[test]
    fn tokenizes_table_literal() {
        assert_eq!(
            tokenize("#(1 2)").unwrap(),
            vec!["#(", "1", "2", ")"]
        );
        assert_eq!(
            tokenize("# (1 2)").unwrap(),
            vec!["#(", "1", "2", ")"]
        );
    }

    #[test]
    fn strips_comments() {
        assert_eq!(
            tokenize("1 ; a comment\n2").unwrap(),
            vec!["1", "2"]
        );
    }

    #[test]
    fn unterminated_string_is_fatal() {
        assert!(tokenize("\"unterminated").is_err());
    }

    #[test]
    fn malformed_table_opener_is_fatal() {
        assert!(tokenize("#x").is_err());
        assert!(tokenize("#").is_err());
    }
}
