use super::Reply;
use anyhow::{Context, Result};
use satchel::domain::config::IoSettings;
use satchel::io::util;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Hex of the first `length` bytes, read through a buffer of the configured size.
pub fn hex(settings: &IoSettings, path: &Path, length: usize, lower: bool) -> Result<Reply> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let reader = BufReader::with_capacity(settings.buffer_size.max(1), file);
    Reply::of(&util::read_hex(reader, length, lower)?)
}
