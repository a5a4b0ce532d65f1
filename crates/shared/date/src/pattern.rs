//! Common layouts, written in `yyyy-MM-dd` notation.

pub const NORM_DATE: &str = "yyyy-MM-dd";
pub const NORM_TIME: &str = "HH:mm:ss";
pub const NORM_DATETIME_MINUTE: &str = "yyyy-MM-dd HH:mm";
pub const NORM_DATETIME: &str = "yyyy-MM-dd HH:mm:ss";
pub const NORM_DATETIME_MS: &str = "yyyy-MM-dd HH:mm:ss.SSS";
pub const PURE_DATE: &str = "yyyyMMdd";
pub const PURE_DATETIME: &str = "yyyyMMddHHmmss";

/// Translates a `yyyy-MM-dd` style pattern into chrono `strftime` items.
///
/// Supported letters: `yyyy`, `yy`, `MM`, `dd`, `HH`, `hh`, `mm`, `ss`, `SSS` and `a`.
/// Text in single quotes is copied literally; any other character is kept as-is.
#[must_use]
pub fn to_strftime(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            i += 1;
            continue;
        }
        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        let item = match (c, run) {
            ('y', 4..) => Some("%Y"),
            ('y', _) => Some("%y"),
            ('M', _) => Some("%m"),
            ('d', _) => Some("%d"),
            ('H', _) => Some("%H"),
            ('h', _) => Some("%I"),
            ('m', _) => Some("%M"),
            ('s', _) => Some("%S"),
            ('S', _) => Some("%3f"),
            ('a', _) => Some("%p"),
            _ => None,
        };
        match item {
            Some(chrono_fmt) => out.push_str(chrono_fmt),
            None => (0..run).for_each(|_| push_literal(&mut out, c)),
        }
        i += run;
    }
    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation() {
        assert_eq!(to_strftime(NORM_DATETIME_MS), "%Y-%m-%d %H:%M:%S.%3f");
        assert_eq!(to_strftime(PURE_DATE), "%Y%m%d");
        assert_eq!(to_strftime("yyyy'T'HH '%'"), "%YT%H %%");
        assert_eq!(to_strftime("yy/MM/dd hh a"), "%y/%m/%d %I %p");
    }
}
