use satchel_kernel::config::{load_config, load_config_or_default};
use satchel_kernel::domain::config::SatchelConfig;
use satchel_kernel::{Assert, UtilError, exception};
use serial_test::serial;

#[test]
#[serial]
fn json_config_overrides_only_given_fields() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("satchel.json");
    std::fs::write(&file, r#"{ "convert": { "custom_first": false, "date_format": "yyyy/MM/dd" } }"#)
        .unwrap();

    let cfg: SatchelConfig = load_config(Some(&file)).unwrap();
    assert!(!cfg.convert.custom_first);
    assert_eq!(cfg.convert.date_format.as_deref(), Some("yyyy/MM/dd"));
    assert_eq!(cfg.log.level, "info");
    assert_eq!(cfg.io.buffer_size, 8192);
}

#[test]
#[serial]
fn malformed_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("satchel.json");
    std::fs::write(&file, r#"{ "io": { "buffer_size": "lots" } }"#).unwrap();

    assert!(load_config_or_default::<SatchelConfig>(Some(&file)).is_err());
}

#[test]
fn assertion_errors_render_like_exceptions() {
    let err = Assert::not_blank("", "{} is required", &[&"name"]).unwrap_err();
    assert!(matches!(err, UtilError::IllegalArgument { .. }));
    assert_eq!(exception::get_message(&err), "UtilError: Illegal argument: name is required");
}
