//! Character classes used by the scanner dispatch.
//!
//! Classification is ASCII-only. Anything outside these classes (including non-ASCII letters) is an invalid
//! character.

/// Characters that start a symbol token. `'` is included: it opens a comment.
pub const SYMBOL_CHARS: &[char] = &[
    '[', ']', '{', '}', '(', ')', '*', '+', '-', '/', '^', '&', '=', '<', '>', ',', '.', ':', ';', '!', '\\', '\'',
];

/// Intra-line whitespace. Line feeds are significant and handled separately.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0B' | '\x0C')
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}

pub fn is_quote(c: char) -> bool {
    c == '"'
}

pub fn is_symbol_start(c: char) -> bool {
    SYMBOL_CHARS.contains(&c)
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_set() {
        assert_eq!(SYMBOL_CHARS.len(), 22);
        assert!(is_symbol_start('^'));
        assert!(is_symbol_start('\''));
        assert!(!is_symbol_start('"'));
        assert!(!is_symbol_start('$'));
        assert!(!is_symbol_start('#'));
    }

    #[test]
    fn test_whitespace_excludes_line_feed() {
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\t'));
        assert!(!is_whitespace('\n'));
        assert!(is_newline('\n'));
    }

    #[test]
    fn test_identifier_classes() {
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('1'));
        assert!(is_ident_continue('1'));
        assert!(!is_ident_start('é'));
    }
}
