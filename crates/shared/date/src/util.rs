use crate::error::DateError;
use crate::pattern::to_strftime;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write;
use tracing::trace;

const DATETIME_LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.3f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
const PURE_DATETIME_LAYOUT: &str = "%Y%m%d%H%M%S";
const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];
const TIME_LAYOUT: &str = "%H:%M:%S";

#[must_use]
pub fn year(date: &NaiveDateTime) -> i32 {
    date.year()
}

/// Current year in the local time zone.
#[must_use]
pub fn this_year() -> i32 {
    Local::now().year()
}

/// Proleptic Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parses the common date layouts.
///
/// Separators are normalised first: `/`, `年` and `月` become `-`, `日` ends the date part,
/// `.` inside the date part becomes `-`, a `T` between date and time becomes a space and a
/// trailing `Z` is dropped. The normalised text is then tried against, in order,
/// `yyyy-MM-dd HH:mm:ss.SSS`, `yyyy-MM-dd HH:mm:ss`, `yyyy-MM-dd HH:mm`, `yyyy-MM-dd`,
/// `yyyyMMddHHmmss`, `yyyyMMdd` and finally `HH:mm:ss` on today's date.
///
/// # Errors
/// Returns [`DateError::Parse`] when no layout matches.
pub fn parse(text: &str) -> Result<NaiveDateTime, DateError> {
    let normalized = normalize(text);
    trace!(input = text, normalized = %normalized, "Parsing date");

    let with_time = DATETIME_LAYOUTS
        .iter()
        .chain([&PURE_DATETIME_LAYOUT])
        .find_map(|layout| NaiveDateTime::parse_from_str(&normalized, layout).ok());
    if let Some(date) = with_time {
        return Ok(date);
    }

    let date_only = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(&normalized, layout).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    if let Some(date) = date_only {
        return Ok(date);
    }

    NaiveTime::parse_from_str(&normalized, TIME_LAYOUT)
        .map(|t| Local::now().date_naive().and_time(t))
        .map_err(|_| DateError::Parse {
            message: format!("No date layout matches [{text}]").into(),
            context: None,
        })
}

/// Parses `text` with a `yyyy-MM-dd` style `pattern`.
///
/// A pattern without time fields yields midnight; a pattern without date fields yields
/// today's date.
///
/// # Errors
/// Returns [`DateError::Parse`] when `text` does not match `pattern`.
pub fn parse_with_format(text: &str, pattern: &str) -> Result<NaiveDateTime, DateError> {
    let layout = to_strftime(pattern);
    let text = text.trim();

    NaiveDateTime::parse_from_str(text, &layout)
        .or_else(|_| {
            NaiveDate::parse_from_str(text, &layout)
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
        })
        .or_else(|_| {
            NaiveTime::parse_from_str(text, &layout).map(|t| Local::now().date_naive().and_time(t))
        })
        .map_err(|e| DateError::Parse {
            message: format!("[{text}] does not match [{pattern}]: {e}").into(),
            context: None,
        })
}

/// Formats `date` with a `yyyy-MM-dd` style `pattern`.
///
/// # Errors
/// Returns [`DateError::Internal`] when the translated pattern cannot be rendered.
pub fn format(date: &NaiveDateTime, pattern: &str) -> Result<String, DateError> {
    let layout = to_strftime(pattern);
    let mut out = String::with_capacity(layout.len() + 8);
    write!(out, "{}", date.format(&layout)).map_err(|_| DateError::Internal {
        message: format!("Invalid date pattern [{pattern}]").into(),
        context: None,
    })?;
    Ok(out)
}

/// Epoch milliseconds to a UTC wall-clock value. `None` when out of chrono's range.
#[must_use]
pub fn from_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|d| d.naive_utc())
}

#[must_use]
pub fn to_millis(date: &NaiveDateTime) -> i64 {
    date.and_utc().timestamp_millis()
}

fn normalize(text: &str) -> String {
    let mut s: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '年' | '月' => '-',
            '日' => ' ',
            other => other,
        })
        .collect();

    if let Some(stripped) = s.strip_suffix('Z') {
        s = stripped.to_owned();
    }
    if let Some(pos) = s.find('T')
        && s[..pos].chars().all(|c| c.is_ascii_digit() || c == '-')
    {
        s.replace_range(pos..=pos, " ");
    }

    let (date_part, time_part) = s.split_once(' ').unwrap_or((s.as_str(), ""));
    let date_part = if date_part.contains(':') {
        date_part.to_owned()
    } else {
        date_part.replace('.', "-")
    };

    let time_part = time_part.trim();
    if time_part.is_empty() { date_part } else { format!("{date_part} {time_part}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_parse_common_layouts() {
        assert_eq!(parse("2024-03-15 08:30:05").unwrap(), ymd_hms(2024, 3, 15, 8, 30, 5));
        assert_eq!(parse("2024/3/5").unwrap(), ymd_hms(2024, 3, 5, 0, 0, 0));
        assert_eq!(parse("2024.03.15 08:30").unwrap(), ymd_hms(2024, 3, 15, 8, 30, 0));
        assert_eq!(parse("2024-03-15T08:30:05Z").unwrap(), ymd_hms(2024, 3, 15, 8, 30, 5));
        assert_eq!(parse("2024年03月15日").unwrap(), ymd_hms(2024, 3, 15, 0, 0, 0));
        assert_eq!(parse("2024年3月15日 10:00:00").unwrap(), ymd_hms(2024, 3, 15, 10, 0, 0));
        assert_eq!(parse("20240315").unwrap(), ymd_hms(2024, 3, 15, 0, 0, 0));
        assert_eq!(parse("20240315083005").unwrap(), ymd_hms(2024, 3, 15, 8, 30, 5));
    }

    #[test]
    fn test_parse_millis_and_time_only() {
        let date = parse("2024-03-15 08:30:05.250").unwrap();
        assert_eq!(date.nanosecond(), 250_000_000);

        let time = parse("23:59:58").unwrap();
        assert_eq!(time.date(), Local::now().date_naive());
        assert_eq!((time.hour(), time.minute(), time.second()), (23, 59, 58));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse("not a date"), Err(DateError::Parse { .. })));
        assert!(parse("2024-13-01").is_err());
    }

    #[test]
    fn test_custom_pattern_both_ways() {
        let date = parse_with_format("15/03/2024 08:30", "dd/MM/yyyy HH:mm").unwrap();
        assert_eq!(date, ymd_hms(2024, 3, 15, 8, 30, 0));
        assert_eq!(format(&date, "yyyyMMdd'T'HHmm").unwrap(), "20240315T0830");

        let day = parse_with_format("2024.03.15", "yyyy.MM.dd").unwrap();
        assert_eq!(day, ymd_hms(2024, 3, 15, 0, 0, 0));
        assert!(parse_with_format("2024-03-15", "dd/MM/yyyy").is_err());
    }

    #[test]
    fn test_millis_are_utc() {
        assert_eq!(from_millis(0).unwrap(), ymd_hms(1970, 1, 1, 0, 0, 0));
        let date = ymd_hms(2024, 3, 15, 8, 30, 5);
        assert_eq!(from_millis(to_millis(&date)).unwrap(), date);
        assert_eq!(to_millis(&ymd_hms(1970, 1, 2, 0, 0, 0)), 86_400_000);
    }
}
