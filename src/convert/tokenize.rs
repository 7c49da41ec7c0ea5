//! Command validation and tokenizing
//!
//! Splits a curl command line into raw tokens. Quote characters are kept in
//! the token so that [`unquote`] can strip exactly one matching layer later.

use crate::errors::ConvertError;

/// The leading token every convertible command must carry
pub const INVOCATION_KEYWORD: &str = "curl";

/// Trim the command and check it starts with the invocation keyword.
///
/// Returns the text following the keyword (possibly empty).
pub fn validate(command: &str) -> Result<&str, ConvertError> {
    let trimmed = command.trim();
    let rest = trimmed
        .strip_prefix(INVOCATION_KEYWORD)
        .ok_or(ConvertError::InvalidCommand)?;

    match rest.chars().next() {
        None => Ok(rest),
        Some(c) if c.is_whitespace() => Ok(rest),
        Some(_) => Err(ConvertError::InvalidCommand),
    }
}

/// Tokenize a command, keeping quoted spans together
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut quote: Option<char> = None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                } else if c == '\\' && q == '"' {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    current.push(c);
                    started = true;
                }
                // Line continuation
                '\\' if matches!(chars.peek(), Some('\n') | Some('\r')) => {
                    while matches!(chars.peek(), Some('\n') | Some('\r')) {
                        chars.next();
                    }
                    if started {
                        tokens.push(std::mem::take(&mut current));
                        started = false;
                    }
                }
                c if c.is_whitespace() => {
                    if started {
                        tokens.push(std::mem::take(&mut current));
                        started = false;
                    }
                }
                _ => {
                    current.push(c);
                    started = true;
                }
            },
        }
    }

    if started {
        tokens.push(current);
    }

    tokens
}

/// Strip one matching layer of `"` or `'` from both ends of a token
pub fn unquote(token: &str) -> String {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            let inner = &token[1..token.len() - 1];
            return if first == b'"' {
                unescape_double_quoted(inner)
            } else {
                inner.to_string()
            };
        }
    }
    token.to_string()
}

fn unescape_double_quoted(inner: &str) -> String {
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '"' || next == '\\' {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keyword() {
        assert_eq!(validate("  curl https://example.com \n").unwrap(), " https://example.com");
        assert_eq!(validate("curl").unwrap(), "");
        assert_eq!(validate("not curl"), Err(ConvertError::InvalidCommand));
        assert_eq!(validate("curling https://x"), Err(ConvertError::InvalidCommand));
        assert_eq!(validate(""), Err(ConvertError::InvalidCommand));
    }

    #[test]
    fn test_tokenize_quotes() {
        let tokens = tokenize(r#" -H 'Content-Type: application/json' "https://example.com""#);
        assert_eq!(tokens, vec!["-H", "'Content-Type: application/json'", "\"https://example.com\""]);
    }

    #[test]
    fn test_tokenize_escaped_double_quote() {
        let tokens = tokenize(r#"-d "{\"a\": 1}" x"#);
        assert_eq!(tokens, vec!["-d", r#""{\"a\": 1}""#, "x"]);
        assert_eq!(unquote(&tokens[1]), r#"{"a": 1}"#);
    }

    #[test]
    fn test_tokenize_line_continuation() {
        let tokens = tokenize("https://example.com \\\n  -H 'A: b' \\\r\n -k");
        assert_eq!(tokens, vec!["https://example.com", "-H", "'A: b'", "-k"]);
    }

    #[test]
    fn test_tokenize_empty_quoted() {
        assert_eq!(tokenize("-d '' x"), vec!["-d", "''", "x"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote_runs_to_end() {
        assert_eq!(tokenize("-d 'a b"), vec!["-d", "'a b"]);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'abc'"), "abc");
        assert_eq!(unquote("\"abc\""), "abc");
        assert_eq!(unquote("'abc\""), "'abc\"");
        assert_eq!(unquote("abc"), "abc");
        assert_eq!(unquote("'"), "'");
        assert_eq!(unquote("''"), "");
    }
}
