use proptest::prelude::*;
use satchel_domain::config::ValidateSettings;
use satchel_lang::{Assert, ValidateError, Validator, validator};

#[test]
fn settings_raise_the_birth_year_floor() {
    let validator = Validator::with_settings(&ValidateSettings { min_birth_year: 2000 });
    assert_eq!(validator.min_birth_year(), 2000);
    assert!(!validator.is_birthday("1999-12-31"));
    assert!(validator.is_birthday("2000-01-01"));
    assert!(validator::is_birthday("1999-12-31"));
}

#[test]
fn validation_errors_carry_the_caller_message() {
    let err = validator::validate_mobile("123", "mobile number is malformed").unwrap_err();
    let ValidateError::Invalid { message, .. } = err;
    assert_eq!(message, "mobile number is malformed");
}

#[test]
fn assert_is_reexported() {
    assert_eq!(Assert::not_null(Some("x"), "value of {} missing", &[&"key"]).unwrap(), "x");
    let err = Assert::not_null::<u8>(None, "value of {} missing", &[&"key"]).unwrap_err();
    assert!(err.to_string().ends_with("value of key missing"));
}

proptest! {
    #[test]
    fn integers_are_numbers(n in any::<i64>()) {
        prop_assert!(validator::is_number(&n.to_string()));
        let long = format!("{n}L");
        prop_assert!(validator::is_number(&long));
    }

    #[test]
    fn floats_are_numbers(f in -1.0e12_f64..1.0e12) {
        let text = format!("{f:?}");
        prop_assert!(validator::is_number(&text));
    }

    #[test]
    fn dotted_quads_are_ipv4(a in any::<u8>(), b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
        let quad = format!("{a}.{b}.{c}.{d}");
        prop_assert!(validator::is_ipv4(&quad));
    }
}
