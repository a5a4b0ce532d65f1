pub const BACKSLASH: char = '\\';
pub const DELIM_START: char = '{';

/// Whether `c` counts as blank: Unicode whitespace, the ASCII information separators,
/// the zero-width no-break space (`U+FEFF`) and the left-to-right embedding mark (`U+202A`).
#[must_use]
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}' | '\u{feff}' | '\u{202a}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_chars() {
        for c in [' ', '\t', '\n', '\u{a0}', '\u{3000}', '\u{feff}', '\u{202a}', '\u{1f}'] {
            assert!(is_blank_char(c), "{:?} should be blank", c);
        }
        for c in ['a', '0', '_', '\u{200b}'] {
            assert!(!is_blank_char(c), "{:?} should not be blank", c);
        }
    }
}
