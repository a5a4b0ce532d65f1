use crate::char_util::is_blank_char;
use crate::charset::Charset;

pub const EMPTY: &str = "";
pub const EMPTY_JSON: &str = "{}";

#[must_use]
pub const fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// Whether `s` is empty or consists only of blank characters (see [`is_blank_char`]).
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

#[must_use]
pub fn is_not_blank(s: &str) -> bool {
    !is_blank(s)
}

/// True when the slice is empty or any element is blank.
#[must_use]
pub fn has_blank(values: &[&str]) -> bool {
    values.is_empty() || values.iter().any(|s| is_blank(s))
}

/// Strips blank characters from both ends, unlike [`str::trim`] this also removes `U+FEFF`.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_blank_char)
}

#[must_use]
pub fn null_to_empty(s: Option<&str>) -> &str {
    s.unwrap_or(EMPTY)
}

/// Decodes `bytes` with `charset`, defaulting to UTF-8. Invalid sequences are replaced.
#[must_use]
pub fn str_from_bytes(bytes: &[u8], charset: Option<Charset>) -> String {
    charset.unwrap_or_default().decode(bytes)
}

#[must_use]
pub fn utf8_str(bytes: &[u8]) -> String {
    str_from_bytes(bytes, Some(Charset::Utf8))
}

/// Null-safe comparison: two `None`s are equal, a single `None` never is.
#[must_use]
pub fn equals(a: Option<&str>, b: Option<&str>, ignore_case: bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) if ignore_case => equals_ignore_case(a, b),
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn equals_ignore_case(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                if x != y
                    && !x.to_uppercase().eq(y.to_uppercase())
                    && !x.to_lowercase().eq(y.to_lowercase())
                {
                    return false;
                }
            },
            _ => return false,
        }
    }
}

/// Whether every character satisfies `matcher`. Blank input never matches.
pub fn is_all_char_match(s: &str, matcher: impl Fn(char) -> bool) -> bool {
    !is_blank(s) && s.chars().all(matcher)
}

/// Char-indexed substring with forgiving bounds.
///
/// Negative indices count from the end, out-of-range indices are clamped and reversed
/// bounds are swapped. A `to` that stays negative after the adjustment means "until the end".
///
/// ```rust
/// use satchel_text::str_util::sub;
///
/// assert_eq!(sub("abcdef", 1, 3), "bc");
/// assert_eq!(sub("abcdef", -2, 100), "ef");
/// assert_eq!(sub("abcdef", 4, 2), "cd");
/// assert_eq!(sub("abcdef", 2, 2), "");
/// ```
#[must_use]
pub fn sub(s: &str, from: isize, to: isize) -> String {
    if s.is_empty() {
        return String::new();
    }
    let len = s.chars().count() as isize;

    let mut from = if from < 0 { (len + from).max(0) } else { from.min(len) };
    let mut to = if to < 0 {
        let shifted = len + to;
        if shifted < 0 { len } else { shifted }
    } else {
        to.min(len)
    };
    if to < from {
        std::mem::swap(&mut from, &mut to);
    }
    if from == to {
        return String::new();
    }
    s.chars().skip(from as usize).take((to - from) as usize).collect()
}

/// The first `to` characters (see [`sub`]).
#[must_use]
pub fn sub_pre(s: &str, to: isize) -> String {
    sub(s, 0, to)
}

/// Everything from character `from` on (see [`sub`]).
#[must_use]
pub fn sub_suf(s: &str, from: isize) -> String {
    if s.is_empty() {
        return String::new();
    }
    sub(s, from, s.chars().count() as isize)
}

/// Char index of the first `c`, if any.
#[must_use]
pub fn index_of(s: &str, c: char) -> Option<usize> {
    s.chars().position(|x| x == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_checks() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n\u{feff}"));
        assert!(!is_blank(" a "));
        assert!(has_blank(&[]));
        assert!(has_blank(&["a", " "]));
        assert!(!has_blank(&["a", "b"]));
        assert_eq!(trim("\u{feff} text\u{3000}"), "text");
    }

    #[test]
    fn test_equals_null_semantics() {
        assert!(equals(None, None, false));
        assert!(!equals(Some("a"), None, true));
        assert!(!equals(None, Some("a"), true));
        assert!(equals(Some("ABC"), Some("abc"), true));
        assert!(!equals(Some("ABC"), Some("abc"), false));
        assert!(equals(Some("Straße"), Some("STRAßE"), true));
        assert!(!equals(Some("ab"), Some("abc"), true));
    }

    #[test]
    fn test_is_all_char_match() {
        assert!(is_all_char_match("ABC", char::is_uppercase));
        assert!(!is_all_char_match("AbC", char::is_uppercase));
        assert!(!is_all_char_match("  ", |_| true));
    }

    #[test]
    fn test_sub_edge_cases() {
        assert_eq!(sub("", 0, 3), "");
        assert_eq!(sub("abc", -10, 2), "ab");
        assert_eq!(sub("abc", 1, -1), "b");
        assert_eq!(sub("abc", 1, -10), "bc");
        assert_eq!(sub("abc", 5, 0), "abc");
        assert_eq!(sub("héllo", 1, 3), "él");
        assert_eq!(sub_pre("abcdef", 3), "abc");
        assert_eq!(sub_suf("abcdef", 3), "def");
        assert_eq!(sub_suf("abc", 10), "");
    }

    #[test]
    fn test_index_of_counts_chars() {
        assert_eq!(index_of("日本?x", '?'), Some(2));
        assert_eq!(index_of("abc", 'z'), None);
    }
}
