use proptest::prelude::*;
use satchel_date::{NaiveDate, format, from_millis, is_leap_year, parse, parse_with_format, to_millis};

proptest! {
    #[test]
    fn leap_years_agree_with_chrono(year in 1_i32..=9999) {
        prop_assert_eq!(is_leap_year(year), NaiveDate::from_ymd_opt(year, 2, 29).is_some());
    }

    #[test]
    fn millis_round_trip(millis in -62_135_596_800_000_i64..253_402_300_799_000) {
        let date = from_millis(millis).unwrap();
        prop_assert_eq!(to_millis(&date), millis);
    }

    #[test]
    fn formatted_dates_parse_back(
        y in 1970_i32..2100,
        m in 1_u32..=12,
        d in 1_u32..=28,
        h in 0_u32..24,
        min in 0_u32..60,
        s in 0_u32..60,
    ) {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap();
        let text = format(&date, "yyyy-MM-dd HH:mm:ss").unwrap();
        prop_assert_eq!(parse(&text).unwrap(), date);
        prop_assert_eq!(parse_with_format(&text, "yyyy-MM-dd HH:mm:ss").unwrap(), date);
    }
}

#[test]
fn separators_are_normalised() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
    for text in ["2024-03-15", "2024/03/15", "20240315", "2024年03月15日"] {
        assert_eq!(parse(text).unwrap(), expected, "{text}");
    }
    assert!(parse("not a date").is_err());
}
