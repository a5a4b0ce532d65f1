use crate::error::{IoError, IoErrorExt};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Reads a UTF-8 text file line by line, terminating every line with the platform separator.
///
/// # Errors
/// Returns [`IoError::Io`] when the file cannot be opened or is not valid UTF-8.
pub fn read(path: impl AsRef<Path>) -> Result<String, IoError> {
    let path = path.as_ref();
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut content = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("Failed to read file: {}", path.display()))?;
        content.push_str(&line);
        content.push_str(LINE_SEPARATOR);
    }
    Ok(content)
}

/// Replaces the file content, creating missing parent directories.
///
/// # Errors
/// Returns [`IoError::Io`] when a directory or the file cannot be written.
pub fn write(path: impl AsRef<Path>, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "File written");
    Ok(())
}

/// Appends to the file, creating it when missing.
///
/// # Errors
/// Returns [`IoError::Io`] when the file cannot be opened or written.
pub fn append(path: impl AsRef<Path>, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open file for append: {}", path.display()))?;
    file.write_all(content.as_bytes()).context("Failed to append to file")?;
    file.flush().context("Failed to flush file")
}

/// Deletes `path` when it is a regular file. Returns `false` for directories and missing paths.
///
/// # Errors
/// Returns [`IoError::Io`] when the removal itself fails.
pub fn unlink(path: impl AsRef<Path>) -> Result<bool, IoError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).with_context(|| format!("Failed to delete file: {}", path.display()))?;
    debug!(path = %path.display(), "File deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parents_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a/b/c.txt");

        write(&path, "first").unwrap();
        write(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_read_terminates_every_line() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lines.txt");
        fs::write(&path, "one\ntwo").unwrap();

        assert_eq!(read(&path).unwrap(), format!("one{LINE_SEPARATOR}two{LINE_SEPARATOR}"));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read(tmp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, IoError::Io { context: Some(_), .. }));
    }

    #[test]
    fn test_append() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.txt");

        append(&path, "a").unwrap();
        append(&path, "b").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "ab");
    }

    #[test]
    fn test_unlink_only_files() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("gone.txt");
        fs::write(&file, "x").unwrap();

        assert!(unlink(&file).unwrap());
        assert!(!file.exists());
        assert!(!unlink(&file).unwrap());
        assert!(!unlink(tmp.path()).unwrap());
        assert!(tmp.path().exists());
    }
}
