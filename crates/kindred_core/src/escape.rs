//! Regex-metacharacter escaping kernel.
//!
//! Escaping is a pure function of a fixed, closed character set and the input string: every
//! metacharacter is preceded by a single backslash, everything else is copied verbatim.
//!
//! ## Notes
//! - The pass is **not** idempotent: escaping an already-escaped string double-escapes the
//!   backslashes that the first pass introduced. That is expected and not special-cased; escape
//!   once, at the boundary where literal text meets a pattern.
//! - Whitespace, digits and `:` are never escaped.

/// The fixed set of characters that are syntactically significant in a pattern.
///
/// Closed by design; a given build never escapes more or fewer characters than these.
pub const REGEX_METACHARACTERS: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}', '-',
];

/// Whether `ch` must be preceded by a backslash to match literally.
#[inline]
pub fn is_metacharacter(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '-'
    )
}

/// Escape every metacharacter in `s` for literal use inside a pattern.
///
/// Single left-to-right pass; no character is examined twice, so an escaped character never
/// re-escapes its own backslash.
///
/// ## Examples
/// ```rust
/// use kindred_core::escape::escape_str;
///
/// assert_eq!(escape_str("[foo]"), "\\[foo\\]");
/// assert_eq!(escape_str("no specials"), "no specials");
/// assert_eq!(escape_str(""), "");
/// ```
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        if is_metacharacter(ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_bracketed_text() {
        assert_eq!(escape_str("[foo]"), "\\[foo\\]");
    }

    #[test]
    fn escapes_the_full_metacharacter_set() {
        // Covers every member of the set, including the hyphen, and leaves
        // spaces, digits and the colon untouched.
        assert_eq!(
            escape_str("([1-2 * foo.bar + ${0} ? 4 || 5 : 4 ^ 5])"),
            "\\(\\[1\\-2 \\* foo\\.bar \\+ \\$\\{0\\} \\? 4 \\|\\| 5 : 4 \\^ 5\\]\\)"
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(escape_str(""), "");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_str("plain text 123 :"), "plain text 123 :");
    }

    #[test]
    fn adjacent_metacharacters_each_get_one_backslash() {
        assert_eq!(escape_str("**"), "\\*\\*");
        assert_eq!(escape_str("\\^"), "\\\\\\^");
    }

    #[test]
    fn double_escape_is_the_documented_limitation() {
        let once = escape_str("a.b");
        let twice = escape_str(&once);
        assert_eq!(once, "a\\.b");
        assert_eq!(twice, "a\\\\\\.b");
        assert_ne!(once, twice);
    }

    #[test]
    fn metacharacter_table_matches_the_predicate() {
        for &ch in REGEX_METACHARACTERS {
            assert!(is_metacharacter(ch), "{ch:?} missing from predicate");
        }
        for ch in "abz 0129:_\"'#@!~&=<>/,;%".chars() {
            assert!(!is_metacharacter(ch), "{ch:?} wrongly escaped");
        }
    }
}
