use crate::error::ValidateError;
use crate::pattern;
use moka::sync::Cache;
use regex::Regex;
use satchel_convert::Value;
use satchel_domain::config::ValidateSettings;
use satchel_domain::constants::DEFAULT_MIN_BIRTH_YEAR;
use satchel_text::str_util;
use std::net::Ipv6Addr;
use std::sync::LazyLock;
use tracing::{debug, trace};

static MAX_CACHED_PATTERNS: u64 = 512;

/// Compiled patterns, keyed by their source text.
static REGEX_CACHE: LazyLock<Cache<String, Regex>> =
    LazyLock::new(|| Cache::builder().max_capacity(MAX_CACHED_PATTERNS).build());

fn compiled(regex: &str) -> Option<Regex> {
    REGEX_CACHE
        .try_get_with(regex.to_owned(), || {
            trace!(regex, "Compiling validation pattern");
            Regex::new(&format!("^(?:{regex})$"))
        })
        .inspect_err(|e| debug!(regex, error = %e, "Invalid validation pattern"))
        .ok()
}

/// `Null` or an empty string.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Str(s) => s.is_empty(),
        _ => false,
    }
}

#[must_use]
pub fn is_not_empty(value: &Value) -> bool {
    !is_empty(value)
}

/// Whether `value` matches `regex` in full. An empty pattern accepts anything; an invalid one
/// rejects everything.
///
/// ```rust
/// use satchel_lang::validator::is_match_regex;
///
/// assert!(is_match_regex(r"\d{3}", "123"));
/// assert!(!is_match_regex(r"\d{3}", "1234"));
/// assert!(!is_match_regex(r"(", "("));
/// ```
#[must_use]
pub fn is_match_regex(regex: &str, value: &str) -> bool {
    if regex.is_empty() {
        return true;
    }
    compiled(regex).is_some_and(|re| re.is_match(value))
}

/// Letters, digits and underscore.
#[must_use]
pub fn is_general(value: &str) -> bool {
    is_match_regex(pattern::GENERAL, value)
}

/// [`is_general`] with a length range. A negative `min` counts as 0; a non-positive `max`
/// lifts the upper bound.
#[must_use]
pub fn is_general_range(value: &str, min: i32, max: i32) -> bool {
    let min = min.max(0);
    let regex = if max <= 0 {
        format!("[0-9A-Za-z_]{{{min},}}")
    } else {
        format!("[0-9A-Za-z_]{{{min},{max}}}")
    };
    is_match_regex(&regex, value)
}

#[must_use]
pub fn is_general_min(value: &str, min: i32) -> bool {
    is_general_range(value, min, 0)
}

/// Every char is alphabetic, CJK ideographs included. Blank input is rejected.
#[must_use]
pub fn is_letter(value: &str) -> bool {
    str_util::is_all_char_match(value, char::is_alphabetic)
}

#[must_use]
pub fn is_upper_case(value: &str) -> bool {
    str_util::is_all_char_match(value, char::is_uppercase)
}

#[must_use]
pub fn is_lower_case(value: &str) -> bool {
    str_util::is_all_char_match(value, char::is_lowercase)
}

/// Number literal check accepting decimals, `0x` hex, exponents, a leading sign and a trailing
/// type qualifier (`L`, `D`, `F`).
///
/// ```rust
/// use satchel_lang::validator::is_number;
///
/// for ok in ["12", "-1.5", "0x1F", "1e10", "2.5E-3", "7L", "3.0f", "1."] {
///     assert!(is_number(ok), "{ok}");
/// }
/// for bad in ["", "0x", "1e", ".", "1.2.3", "1eL", "12a"] {
///     assert!(!is_number(bad), "{bad}");
/// }
/// ```
#[must_use]
pub fn is_number(value: &str) -> bool {
    if str_util::is_blank(value) {
        return false;
    }
    let chars = value.as_bytes();
    let start = usize::from(matches!(chars[0], b'-' | b'+'));

    if chars.len() > start + 1 && chars[start] == b'0' && matches!(chars[start + 1], b'x' | b'X') {
        let digits = &chars[start + 2..];
        return !digits.is_empty() && digits.iter().all(u8::is_ascii_hexdigit);
    }

    let last = chars.len() - 1;
    let mut has_exp = false;
    let mut has_dec_point = false;
    let mut allow_signs = false;
    let mut found_digit = false;
    let mut i = start;
    // The last char is checked separately for type qualifiers, unless a digit is still owed
    // after an exponent sign.
    while i < last || (i == last && allow_signs && !found_digit) {
        match chars[i] {
            b'0'..=b'9' => {
                found_digit = true;
                allow_signs = false;
            },
            b'.' => {
                if has_dec_point || has_exp {
                    return false;
                }
                has_dec_point = true;
            },
            b'e' | b'E' => {
                if has_exp || !found_digit {
                    return false;
                }
                has_exp = true;
                allow_signs = true;
            },
            b'+' | b'-' => {
                if !allow_signs {
                    return false;
                }
                allow_signs = false;
                found_digit = false;
            },
            _ => return false,
        }
        i += 1;
    }

    match chars.get(i) {
        Some(b'0'..=b'9') => true,
        Some(b'e' | b'E') => false,
        Some(b'.') => !has_dec_point && !has_exp && found_digit,
        Some(b'd' | b'D' | b'f' | b'F') if !allow_signs => found_digit,
        Some(b'l' | b'L') => found_digit && !has_exp,
        Some(_) => false,
        None => !allow_signs && found_digit,
    }
}

#[must_use]
pub fn is_word(value: &str) -> bool {
    is_match_regex(pattern::WORD, value)
}

#[must_use]
pub fn is_money(value: &str) -> bool {
    is_match_regex(pattern::MONEY, value)
}

#[must_use]
pub fn is_zip_code(value: &str) -> bool {
    is_match_regex(pattern::ZIP_CODE, value)
}

#[must_use]
pub fn is_email(value: &str) -> bool {
    is_match_regex(pattern::EMAIL, value)
}

#[must_use]
pub fn is_mobile(value: &str) -> bool {
    is_match_regex(pattern::MOBILE, value)
}

#[must_use]
pub fn is_citizen_id(value: &str) -> bool {
    is_match_regex(pattern::CITIZEN_ID, value)
}

#[must_use]
pub fn is_ipv4(value: &str) -> bool {
    is_match_regex(pattern::IPV4, value)
}

/// Standard IPv6 notation, optionally followed by a `%zone` suffix.
#[must_use]
pub fn is_ipv6(value: &str) -> bool {
    let address = value.split_once('%').map_or(value, |(addr, zone)| {
        if zone.is_empty() { value } else { addr }
    });
    address.parse::<Ipv6Addr>().is_ok()
}

#[must_use]
pub fn is_mac(value: &str) -> bool {
    is_match_regex(pattern::MAC_ADDRESS, value)
}

#[must_use]
pub fn is_plate_number(value: &str) -> bool {
    is_match_regex(pattern::PLATE_NUMBER, value)
}

/// Absolute URL with a scheme.
#[must_use]
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

#[must_use]
pub fn is_chinese(value: &str) -> bool {
    is_match_regex(&format!("{}+", pattern::CHINESE), value)
}

#[must_use]
pub fn is_general_with_chinese(value: &str) -> bool {
    is_match_regex(pattern::GENERAL_WITH_CHINESE, value)
}

/// Hyphenated or plain 32-digit UUID.
#[must_use]
pub fn is_uuid(value: &str) -> bool {
    is_match_regex(pattern::UUID, value) || is_match_regex(pattern::UUID_SIMPLE, value)
}

#[must_use]
pub fn is_hex(value: &str) -> bool {
    is_match_regex(pattern::HEX, value)
}

/// Inclusive range check.
#[must_use]
pub fn is_between(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Birthday checks with the default lower year bound.
#[must_use]
pub fn is_birthday_ymd(year: i32, month: u32, day: u32) -> bool {
    Validator::default().is_birthday_ymd(year, month, day)
}

#[must_use]
pub fn is_birthday(value: &str) -> bool {
    Validator::default().is_birthday(value)
}

macro_rules! validators {
    ($($validate:ident => $check:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Returns `value` when [`", stringify!($check), "`] accepts it.")]
            ///
            /// # Errors
            /// Returns [`ValidateError::Invalid`] carrying `msg` otherwise.
            pub fn $validate<'a>(value: &'a str, msg: &str) -> Result<&'a str, ValidateError> {
                if $check(value) { Ok(value) } else { Err(ValidateError::invalid(msg.to_owned())) }
            }
        )+
    };
}

validators! {
    validate_general => is_general,
    validate_letter => is_letter,
    validate_upper_case => is_upper_case,
    validate_lower_case => is_lower_case,
    validate_number => is_number,
    validate_word => is_word,
    validate_money => is_money,
    validate_zip_code => is_zip_code,
    validate_email => is_email,
    validate_mobile => is_mobile,
    validate_citizen_id => is_citizen_id,
    validate_birthday => is_birthday,
    validate_ipv4 => is_ipv4,
    validate_ipv6 => is_ipv6,
    validate_mac => is_mac,
    validate_plate_number => is_plate_number,
    validate_url => is_url,
    validate_chinese => is_chinese,
    validate_general_with_chinese => is_general_with_chinese,
    validate_uuid => is_uuid,
    validate_hex => is_hex,
}

/// # Errors
/// Returns [`ValidateError::Invalid`] carrying `msg` when `value` is empty.
pub fn validate_not_empty<'a>(value: &'a Value, msg: &str) -> Result<&'a Value, ValidateError> {
    if is_empty(value) { Err(ValidateError::invalid(msg.to_owned())) } else { Ok(value) }
}

/// # Errors
/// Returns [`ValidateError::Invalid`] carrying `msg` when `value` does not match `regex`.
pub fn validate_match_regex<'a>(
    regex: &str,
    value: &'a str,
    msg: &str,
) -> Result<&'a str, ValidateError> {
    if is_match_regex(regex, value) {
        Ok(value)
    } else {
        Err(ValidateError::invalid(msg.to_owned()))
    }
}

/// # Errors
/// Returns [`ValidateError::Invalid`] carrying `msg` when the length or charset is off.
pub fn validate_general_range<'a>(
    value: &'a str,
    min: i32,
    max: i32,
    msg: &str,
) -> Result<&'a str, ValidateError> {
    if is_general_range(value, min, max) {
        Ok(value)
    } else {
        Err(ValidateError::invalid(msg.to_owned()))
    }
}

/// # Errors
/// Returns [`ValidateError::Invalid`] carrying `msg` when `value` lies outside `[min, max]`.
pub fn validate_between(value: f64, min: f64, max: f64, msg: &str) -> Result<f64, ValidateError> {
    if is_between(value, min, max) { Ok(value) } else { Err(ValidateError::invalid(msg.to_owned())) }
}

/// Validation rules that depend on settings.
///
/// Only the birthday check is configurable: the year must lie between `min_birth_year` and the
/// current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    min_birth_year: i32,
}

impl Default for Validator {
    fn default() -> Self {
        Self { min_birth_year: DEFAULT_MIN_BIRTH_YEAR }
    }
}

impl Validator {
    #[must_use]
    pub const fn new(min_birth_year: i32) -> Self {
        Self { min_birth_year }
    }

    #[must_use]
    pub const fn with_settings(settings: &ValidateSettings) -> Self {
        Self::new(settings.min_birth_year)
    }

    #[must_use]
    pub const fn min_birth_year(&self) -> i32 {
        self.min_birth_year
    }

    /// Calendar check: month and day must exist, with Feb 29 only in leap years.
    #[must_use]
    pub fn is_birthday_ymd(&self, year: i32, month: u32, day: u32) -> bool {
        if year < self.min_birth_year || year > satchel_date::this_year() {
            return false;
        }
        let max_day = match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if satchel_date::is_leap_year(year) => 29,
            2 => 28,
            _ => return false,
        };
        (1..=max_day).contains(&day)
    }

    /// Accepts `yyyyMMdd`, `yyyy-MM-dd`, `yyyy/MM/dd`, `yyyy.MM.dd` and `yyyy年MM月dd日`.
    #[must_use]
    pub fn is_birthday(&self, value: &str) -> bool {
        let Some(re) = compiled(pattern::BIRTHDAY) else {
            return false;
        };
        let Some(caps) = re.captures(value) else {
            return false;
        };
        let field = |i| caps.get(i).map_or("", |m| m.as_str());
        match (field(1).parse(), field(3).parse(), field(5).parse()) {
            (Ok(year), Ok(month), Ok(day)) => self.is_birthday_ymd(year, month, day),
            _ => false,
        }
    }

    /// # Errors
    /// Returns [`ValidateError::Invalid`] carrying `msg` when `value` is not a valid birthday.
    pub fn validate_birthday<'a>(
        &self,
        value: &'a str,
        msg: &str,
    ) -> Result<&'a str, ValidateError> {
        if self.is_birthday(value) { Ok(value) } else { Err(ValidateError::invalid(msg.to_owned())) }
    }
}
