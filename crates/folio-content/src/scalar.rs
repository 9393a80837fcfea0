//! Scalar normalization.
//!
//! A scalar is the raw text of one value: the remainder of a `key: value`
//! line or of a `- item` line. Normalization trims surrounding whitespace and
//! strips one matching pair of outer quotes. Escape sequences are not
//! interpreted.

/// Normalize a raw scalar.
///
/// # Example
///
/// ```rust
/// use folio_content::parse_scalar;
///
/// assert_eq!(parse_scalar("  \"quoted\"  "), "quoted");
/// assert_eq!(parse_scalar("'single'"), "single");
/// assert_eq!(parse_scalar("plain text"), "plain text");
/// assert_eq!(parse_scalar("\"unbalanced"), "\"unbalanced");
/// ```
pub fn parse_scalar(raw: &str) -> String {
    let value = raw.trim();
    match strip_quotes(value, '"').or_else(|| strip_quotes(value, '\'')) {
        Some(inner) => inner.to_string(),
        None => value.to_string(),
    }
}

fn strip_quotes(value: &str, quote: char) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    value.strip_prefix(quote)?.strip_suffix(quote)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(parse_scalar(""), "");
        assert_eq!(parse_scalar("   \t "), "");
    }

    #[test]
    fn test_strips_one_pair_of_quotes() {
        assert_eq!(parse_scalar("\"a\""), "a");
        assert_eq!(parse_scalar("'a'"), "a");
        assert_eq!(parse_scalar("\"\"x\"\""), "\"x\"");
        assert_eq!(parse_scalar("\"\""), "");
    }

    #[test]
    fn test_single_quote_char_is_kept() {
        assert_eq!(parse_scalar("\""), "\"");
        assert_eq!(parse_scalar("'"), "'");
    }

    #[test]
    fn test_mismatched_quotes_are_kept() {
        assert_eq!(parse_scalar("\"a'"), "\"a'");
        assert_eq!(parse_scalar("'a\""), "'a\"");
    }

    #[test]
    fn test_no_escape_processing() {
        assert_eq!(parse_scalar(r#""a\"b""#), r#"a\"b"#);
        assert_eq!(parse_scalar(r#""line\n""#), r#"line\n"#);
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        assert_eq!(parse_scalar("\"  padded  \""), "  padded  ");
    }

    proptest! {
        #[test]
        fn test_idempotent_on_unquoted(s in "[^\"'\\s][^\"']*[^\"'\\s]|[^\"'\\s]") {
            let once = parse_scalar(&s);
            prop_assert_eq!(&once, &s);
            prop_assert_eq!(parse_scalar(&once), once);
        }

        #[test]
        fn test_quoting_roundtrip(s in "[a-zA-Z0-9 ,.]*") {
            let quoted = format!("\"{s}\"");
            prop_assert_eq!(parse_scalar(&quoted), s);
        }
    }
}
