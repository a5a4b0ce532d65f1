use crate::constants::{DEFAULT_BUFFER_SIZE, DEFAULT_MIN_BIRTH_YEAR};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level settings shared by the CLI and the library crates.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SatchelConfigInner {
    pub log: LogSettings,
    pub convert: ConvertSettings,
    pub io: IoSettings,
    pub validate: ValidateSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SatchelConfig {
    #[serde(flatten, default)]
    inner: Arc<SatchelConfigInner>,
}

impl Deref for SatchelConfig {
    type Target = SatchelConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SatchelConfig {
    fn deref_mut(&mut self) -> &mut SatchelConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    pub console: bool,
    /// Rolling log directory; file logging is disabled when absent.
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
    pub env_filter: Option<String>,
}

/// Converter registry defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConvertSettings {
    /// Prefer user-registered converters over the built-in ones.
    pub custom_first: bool,
    /// Java-style pattern (`yyyy-MM-dd`) used by the date converter instead of auto-detection.
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IoSettings {
    pub buffer_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidateSettings {
    pub min_birth_year: i32,
}

// --- Default ---

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            dir: None,
            json: false,
            max_files: 10,
            env_filter: None,
        }
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self { custom_first: true, date_format: None }
    }
}

impl Default for IoSettings {
    fn default() -> Self {
        Self { buffer_size: DEFAULT_BUFFER_SIZE }
    }
}

impl Default for ValidateSettings {
    fn default() -> Self {
        Self { min_birth_year: DEFAULT_MIN_BIRTH_YEAR }
    }
}
