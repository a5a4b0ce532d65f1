use super::{Converter, convert_to_str};
use crate::error::ConvertError;
use crate::target::TargetType;
use crate::value::Value;
use chrono::{FixedOffset, Offset, Utc};
use satchel_date::{from_millis, parse, parse_with_format};
use satchel_text::str_util::{is_blank, trim};
use tracing::debug;

/// Converts integers (epoch millis) and text to dates.
///
/// Without a format, text goes through [`satchel_date::parse`], which accepts the common
/// layouts; with one, the text must match it exactly.
#[derive(Debug, Clone, Default)]
pub struct DateConverter {
    format: Option<String>,
}

impl DateConverter {
    #[must_use]
    pub fn new(format: Option<String>) -> Self {
        Self { format: format.filter(|f| !is_blank(f)) }
    }

    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

impl Converter for DateConverter {
    fn target(&self) -> TargetType {
        TargetType::Date
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        if let Some(millis) = value.as_i128() {
            return Ok(i64::try_from(millis).ok().and_then(from_millis).map(Value::Date));
        }
        let text = convert_to_str(value);
        let text = trim(&text);
        if is_blank(text) {
            return Ok(None);
        }
        let parsed = match &self.format {
            Some(format) => parse_with_format(text, format),
            None => parse(text),
        };
        match parsed {
            Ok(date) => Ok(Some(Value::Date(date))),
            Err(e) => {
                debug!(input = text, error = %e, "Unparseable date");
                Ok(None)
            },
        }
    }
}

/// Converts time zone IDs to fixed offsets. Unknown IDs become UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeZoneConverter;

impl Converter for TimeZoneConverter {
    fn target(&self) -> TargetType {
        TargetType::TimeZone
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        let text = convert_to_str(value);
        Ok(Some(Value::TimeZone(parse_time_zone(&text))))
    }
}

/// Parses `UTC`, `GMT`, `Z`, `GMT+8`, `UTC-05:30`, `+08:00` or `+0800`. Anything else is UTC.
#[must_use]
pub fn parse_time_zone(id: &str) -> FixedOffset {
    let utc = Utc.fix();
    let id = trim(id).to_ascii_uppercase();
    let offset = id.strip_prefix("UTC").or_else(|| id.strip_prefix("GMT")).unwrap_or(&id);
    if offset.is_empty() || offset == "Z" {
        return utc;
    }
    parse_offset(offset).unwrap_or_else(|| {
        debug!(id = %id, "Unknown time zone, using UTC");
        utc
    })
}

fn parse_offset(offset: &str) -> Option<FixedOffset> {
    let (sign, rest) = match offset.as_bytes().first()? {
        b'+' => (1, &offset[1..]),
        b'-' => (-1, &offset[1..]),
        _ => return None,
    };
    if !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    if hours.is_empty() || hours.len() > 2 || minutes.len() > 2 {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 18 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    #[test]
    fn test_date_from_millis_and_text() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let millis = expected.and_utc().timestamp_millis();

        let c = DateConverter::default();
        assert_eq!(c.convert(&Value::I64(millis), None), Some(Value::Date(expected)));
        assert_eq!(c.convert(&Value::from("2024/03/15"), None), Some(Value::Date(expected)));
        assert_eq!(c.convert(&Value::from("garbage"), None), None);
    }

    #[test]
    fn test_date_with_explicit_format() {
        let c = DateConverter::new(Some("dd.MM.yyyy".to_owned()));
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(c.convert(&Value::from("15.03.2024"), None), Some(Value::Date(expected)));
        assert_eq!(c.convert(&Value::from("2024-03-15"), None), None);
        assert_eq!(DateConverter::new(Some("  ".to_owned())).format(), None);
    }

    #[test]
    fn test_time_zone_ids() {
        assert_eq!(parse_time_zone("UTC"), hours(0));
        assert_eq!(parse_time_zone("gmt+8"), hours(8));
        assert_eq!(parse_time_zone("GMT+08:00"), hours(8));
        assert_eq!(parse_time_zone("+0800"), hours(8));
        assert_eq!(parse_time_zone("UTC-05:30"), FixedOffset::west_opt(5 * 3600 + 1800).unwrap());
        assert_eq!(parse_time_zone("Z"), hours(0));
        assert_eq!(parse_time_zone("Mars/Olympus"), hours(0));
        assert_eq!(parse_time_zone("+25"), hours(0));
    }

    #[test]
    fn test_time_zone_non_ascii_offset_is_utc() {
        assert_eq!(parse_time_zone("+a€"), hours(0));
        assert_eq!(parse_time_zone("GMT+1€"), hours(0));
        assert_eq!(parse_time_zone("UTC+０８"), hours(0));
        assert_eq!(parse_time_zone("+-5"), hours(0));
    }
}
