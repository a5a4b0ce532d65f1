//! `{}` placeholder templates.
//!
//! Placeholders are filled left to right. A backslash escapes a placeholder (`\{}` renders a
//! literal `{}`), and a doubled backslash escapes the escape (`\\{}` renders `\` followed by
//! the argument). Surplus placeholders stay in the output; surplus arguments are dropped.

use crate::char_util::{BACKSLASH, DELIM_START};
use crate::str_util::{EMPTY_JSON, is_blank};
use std::fmt::Display;

/// Renders `template`, substituting each `{}` with the next argument.
///
/// ```rust
/// use satchel_text::format::format;
///
/// assert_eq!(format("this is {} for {}", &[&"a", &"b"]), "this is a for b");
/// assert_eq!(format(r"this is \{} for {}", &[&"a", &"b"]), "this is {} for a");
/// assert_eq!(format(r"this is \\{} for {}", &[&"a", &"b"]), r"this is \a for b");
/// ```
#[must_use]
pub fn format(template: &str, params: &[&dyn Display]) -> String {
    if params.is_empty() || is_blank(template) {
        return template.to_owned();
    }

    let bytes = template.as_bytes();
    let escape = BACKSLASH as u8;
    let mut out = String::with_capacity(template.len() + 50);
    let mut handled = 0;
    let mut next_param = 0;

    while next_param < params.len() {
        let Some(relative) = template[handled..].find(EMPTY_JSON) else {
            if handled == 0 {
                return template.to_owned();
            }
            break;
        };
        let delim = handled + relative;

        if delim > 0 && bytes[delim - 1] == escape {
            out.push_str(&template[handled..delim - 1]);
            if delim > 1 && bytes[delim - 2] == escape {
                // The backslash itself is escaped, so the placeholder stays live.
                out.push_str(&params[next_param].to_string());
                next_param += 1;
                handled = delim + 2;
            } else {
                out.push(DELIM_START);
                handled = delim + 1;
            }
        } else {
            out.push_str(&template[handled..delim]);
            out.push_str(&params[next_param].to_string());
            next_param += 1;
            handled = delim + 2;
        }
    }

    out.push_str(&template[handled..]);
    out
}

/// [`format`] with inline arguments.
///
/// ```rust
/// use satchel_text::strfmt;
///
/// assert_eq!(strfmt!("{}-{}", 'a', 42), "a-42");
/// assert_eq!(strfmt!("no params {}"), "no params {}");
/// ```
#[macro_export]
macro_rules! strfmt {
    ($template:expr $(,)?) => {
        $crate::format::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format::format($template, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_more_placeholders_than_params() {
        assert_eq!(format("{} and {}", &[&1]), "1 and {}");
    }

    #[test]
    fn test_more_params_than_placeholders() {
        assert_eq!(format("only {}", &[&1, &2, &3]), "only 1");
        assert_eq!(format("none", &[&1]), "none");
    }

    #[test]
    fn test_blank_template_is_untouched() {
        assert_eq!(format("   ", &[&1]), "   ");
        assert_eq!(format("{}", &[]), "{}");
    }

    #[test]
    fn test_adjacent_and_unicode_placeholders() {
        assert_eq!(format("{}{}", &[&"x", &"y"]), "xy");
        assert_eq!(format("名字: {}!", &[&"张三"]), "名字: 张三!");
        assert_eq!(format(r"\{}{}", &[&"v"]), "{}v");
    }

    #[test]
    fn test_escaped_backslash_keeps_placeholder_live() {
        assert_eq!(format(r"a\\{}b", &[&1]), r"a\1b");
        assert_eq!(format(r"\\{} {}", &[&1.5, &'c']), r"\1.5 c");
    }
}
