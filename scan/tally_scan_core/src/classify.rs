//! Scalar classification predicates.
//!
//! Free functions rather than methods so they can be handed straight to
//! [`Scanner::advance_while`](crate::Scanner::advance_while) and friends.
//! The Unicode classes defer to the standard library's property tables,
//! which are process-wide, read-only, and shared by all scanners without
//! synchronization.

/// ASCII decimal digit, `'0'..='9'`.
///
/// Deliberately ASCII-only: numeric literals are base-10 ASCII, and other
/// Unicode decimal digits are not valid literal characters.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// String delimiter, `"` or `'`.
#[inline]
pub fn is_string_delimiter(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Any Unicode whitespace scalar, newlines included.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Any Unicode letter scalar.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Letter or ASCII digit.
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_ascii_only() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        // Devanagari digit five is a Unicode Nd but not a literal digit
        assert!(!is_digit('५'));
    }

    #[test]
    fn string_delimiters() {
        assert!(is_string_delimiter('"'));
        assert!(is_string_delimiter('\''));
        assert!(!is_string_delimiter('`'));
    }

    #[test]
    fn whitespace_covers_unicode_and_newlines() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\u{00A0}')); // no-break space
        assert!(!is_whitespace('x'));
    }

    #[test]
    fn letters_cover_unicode() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('é'));
        assert!(is_letter('中'));
        assert!(!is_letter('3'));
        assert!(!is_letter('_'));
    }

    #[test]
    fn alphanumeric_is_letter_or_digit() {
        assert!(is_alphanumeric('a'));
        assert!(is_alphanumeric('7'));
        assert!(is_alphanumeric('中'));
        assert!(!is_alphanumeric('_'));
        assert!(!is_alphanumeric(' '));
        // Unicode Nd outside ASCII: letter check fails, digit check is
        // ASCII-only, so this is rejected
        assert!(!is_alphanumeric('५'));
    }
}
