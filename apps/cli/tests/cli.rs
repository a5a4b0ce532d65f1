use assert_cmd::Command;
use predicates::prelude::*;

fn satchel() -> Command {
    let mut cmd = Command::cargo_bin("satchel").unwrap();
    cmd.env("SATCHEL__LOG__LEVEL", "warn");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    satchel().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn convert_numbers_and_lists() {
    satchel().args(["convert", "--to", "i32", " 42 "]).assert().success().stdout("42\n");
    satchel().args(["convert", "--to", "list<i64>", "1,2,3"]).assert().success().stdout("[1, 2, 3]\n");
}

#[test]
fn convert_falls_back_to_default() {
    satchel()
        .args(["convert", "--to", "i32", "abc", "--default", "7"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn convert_unknown_target_fails() {
    satchel()
        .args(["convert", "--to", "decimal", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown target type"));
}

#[test]
fn json_envelope() {
    satchel()
        .args(["--json", "convert", "--to", "bool", "yes"])
        .assert()
        .success()
        .stdout("{\"code\":0,\"message\":\"success\",\"data\":true}\n");
}

#[test]
fn validate_rules() {
    satchel().args(["validate", "email", "dev@example.com"]).assert().success().stdout("true\n");
    satchel().args(["validate", "ipv4", "256.1.1.1"]).assert().success().stdout("false\n");
    satchel().args(["validate", "citizen-id", "abc"]).assert().success().stdout("false\n");
}

#[test]
fn text_tools() {
    satchel().args(["format", "{} + {} = {}", "1", "2", "3"]).assert().success().stdout("1 + 2 = 3\n");
    satchel().args(["similarity", "abc", "abc"]).assert().success().stdout("1\n");
    satchel().args(["camel", "userName"]).assert().success().stdout("user_name\n");
}

#[test]
fn url_tools() {
    satchel()
        .args(["url", "normalize", "www.a.com//b\\c?x=1"])
        .assert()
        .success()
        .stdout("http://www.a.com/b/c?x=1\n");
    satchel().args(["url", "encode", "a b&c"]).assert().success().stdout("a+b%26c\n");
    satchel().args(["url", "decode", "a+b%20c"]).assert().success().stdout("a b c\n");
    satchel().args(["url", "decode", "%zz"]).assert().failure();
}

#[test]
fn hex_reads_file_prefix() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("sample.bin");
    std::fs::write(&path, b"PNG!rest").unwrap();

    satchel()
        .args(["hex", "--length", "4"])
        .arg(&path)
        .assert()
        .success()
        .stdout("504E4721\n");
}

#[test]
fn config_file_drives_validation() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("satchel.toml");
    std::fs::write(&path, "[validate]\nmin_birth_year = 2000\n").unwrap();

    satchel().args(["validate", "birthday", "1990-01-01"]).assert().success().stdout("true\n");
    satchel()
        .arg("--config")
        .arg(&path)
        .args(["validate", "birthday", "1990-01-01"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn missing_config_file_fails() {
    satchel()
        .args(["--config", "does/not/exist.toml", "camel", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
