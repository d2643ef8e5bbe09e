use crate::result::{Result, ShellError};

/// Tokens are limited to this many bytes, exclusive.
pub const MAX_TOKEN_LEN: usize = 50;
pub const MAX_TOKENS: usize = 1000;

pub const AND: &str = "&&";
pub const OR: &str = "||";
pub const PIPE: &str = "|";
pub const SEQUENTIAL: &str = ";";
pub const PARALLEL: &str = "&";
pub const REDIRECT_OUT: &str = ">";

/// Tokens that may not stand where a program name is expected.
pub fn is_operator(token: &str) -> bool {
    matches!(token, AND | OR | PIPE | SEQUENTIAL | PARALLEL | REDIRECT_OUT)
}

/// ASCII whitespace plus vertical tab, the same set as C `isspace`.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Splits a line on runs of whitespace.
///
/// Operators are only recognized later, and only as whole tokens: `a&&b` is a
/// single word.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();

    for word in line.split(is_separator).filter(|w| !w.is_empty()) {
        if word.len() >= MAX_TOKEN_LEN {
            return Err(ShellError::TokenTooLong {
                token: word.to_string(),
                len: word.len(),
                max: MAX_TOKEN_LEN - 1,
            });
        }
        if tokens.len() == MAX_TOKENS {
            return Err(ShellError::TooManyTokens(MAX_TOKENS));
        }
        tokens.push(word.to_string());
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t  ").unwrap().is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        let tokens = tokenize("  ls   -l\t/tmp  ").unwrap();
        assert_eq!(tokens, ["ls", "-l", "/tmp"]);
    }

    #[test]
    fn only_ascii_whitespace_separates() {
        assert_eq!(tokenize("echo a\u{a0}b").unwrap(), ["echo", "a\u{a0}b"]);
        assert_eq!(tokenize("a\x0bb\x0cc\rd").unwrap(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn operators_need_surrounding_whitespace() {
        assert_eq!(tokenize("a&&b").unwrap(), ["a&&b"]);
        assert_eq!(tokenize("a && b;c").unwrap(), ["a", "&&", "b;c"]);
        assert_eq!(tokenize("echo hi>out").unwrap(), ["echo", "hi>out"]);
    }

    #[test]
    fn token_length_limit() {
        let longest = "x".repeat(MAX_TOKEN_LEN - 1);
        assert_eq!(tokenize(&longest).unwrap(), [longest.clone()]);

        let too_long = "x".repeat(MAX_TOKEN_LEN);
        let err = tokenize(&format!("echo {too_long}")).unwrap_err();
        assert!(matches!(err, ShellError::TokenTooLong { len, .. } if len == MAX_TOKEN_LEN));
    }

    #[test]
    fn token_count_limit() {
        let line = vec!["a"; MAX_TOKENS].join(" ");
        assert_eq!(tokenize(&line).unwrap().len(), MAX_TOKENS);

        let line = vec!["a"; MAX_TOKENS + 1].join(" ");
        assert!(matches!(tokenize(&line), Err(ShellError::TooManyTokens(_))));
    }
}
