use satchel_domain::config::LogSettings;
use satchel_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_with_dir_write_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let settings = LogSettings {
        level: "debug".to_owned(),
        console: false,
        dir: Some(log_dir.clone()),
        json: true,
        max_files: 3,
        env_filter: None,
    };

    let logger = Logger::from_settings("integration-file-logging", &settings)?;
    assert!(logger.guard().is_some(), "file output should hold a worker guard");

    tracing::info!(answer = 42, "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().next().expect("log file should not be empty");
    assert!(first.starts_with('{'), "expected a JSON line, got {first}");
    assert!(contents.contains("\"answer\":42"));

    Ok(())
}
