//! # Logger
//!
//! `tracing` bootstrap for Satchel binaries. Events go to stderr, to a rolling log
//! directory, or both; the directory can hold plain text or JSON lines.
//!
//! Two entry points:
//! * [`Logger::builder`] for code that wires the output by hand;
//! * [`Logger::from_settings`] for the `log` section of `SatchelConfig`.
//!
//! `RUST_LOG` is honoured unless an explicit filter such as
//! `"satchel_convert=debug,satchel_io=warn"` is supplied.
//!
//! ```rust
//! # use satchel_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("satchel")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use satchel_domain::config::LogSettings;
use stage::Stage;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_EXTENSION: &str = "log";

type Filtered = Layered<EnvFilter, Registry>;
type OutputLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;

#[derive(Debug)]
struct Options {
    console: bool,
    dir: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    filter: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            console: true,
            dir: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            filter: None,
        }
    }
}

/// Builder stage: no name given yet.
#[derive(Debug)]
pub struct Unnamed;
/// Builder stage: named, ready to [`LoggerBuilder::init`].
#[derive(Debug)]
pub struct Named(String);
/// Output stage: stderr only.
#[derive(Debug)]
pub struct StderrOnly;
/// Output stage: a rolling directory has been set.
#[derive(Debug)]
pub struct Rolling;

mod stage {
    pub trait Stage {}
}
impl Stage for Unnamed {}
impl Stage for Named {}
impl Stage for StderrOnly {}
impl Stage for Rolling {}

/// Staged builder for the global subscriber.
///
/// A name is required before `init`; file options (`max_files`, `rotation`, `json`) only
/// exist once [`LoggerBuilder::path`] has been called.
#[derive(Debug)]
pub struct LoggerBuilder<N: Stage = Unnamed, O: Stage = StderrOnly> {
    options: Options,
    name: N,
    output: PhantomData<O>,
}

impl<O: Stage> LoggerBuilder<Unnamed, O> {
    /// Names the logger. Rolled files are called `<name>.<date>.log`.
    #[must_use]
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, O> {
        LoggerBuilder { options: self.options, name: Named(name.into()), output: PhantomData }
    }
}

impl LoggerBuilder<Named, Rolling> {
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.options.max_files = max;
        self
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.options.rotation = rotation;
        self
    }

    /// Files receive one JSON object per event.
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.options.json = true;
        self
    }
}

impl<O: Stage> LoggerBuilder<Named, O> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.options.level = level;
        self
    }

    /// Directive string used instead of `RUST_LOG`. Parsed during `init`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.options.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.options.console = enabled;
        self
    }

    /// Enables rolling file output under `dir`.
    #[must_use]
    pub fn path(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Named, Rolling> {
        let mut options = self.options;
        options.dir = Some(dir.into());
        LoggerBuilder { options, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// Hold the returned [`Logger`] until exit: it owns the file writer's worker.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name, `max_files == 0`, a bad
    ///   filter, or when neither stderr nor file output is enabled.
    /// * [`LoggerError::Appender`] when the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] when a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { options, name: Named(name), .. } = self;
        check_options(&name, &options)?;
        let filter = env_filter(options.level, options.filter.as_deref())?;

        let mut outputs: Vec<OutputLayer> = Vec::with_capacity(2);
        if options.console {
            outputs.push(stderr_layer());
        }
        let guard = match &options.dir {
            Some(dir) => {
                let (file, guard) = rolling_layer(&name, dir, &options)?;
                outputs.push(file);
                Some(guard)
            },
            None => None,
        };
        if outputs.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "neither console nor file output is enabled".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(outputs).try_init()?;
        Ok(Logger { guard })
    }
}

/// Live logging handle. Dropping it flushes and stops the file writer.
#[must_use = "dropping the handle stops file logging"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { options: Options::default(), name: Unnamed, output: PhantomData }
    }

    /// Installs the subscriber described by a `log` config section.
    ///
    /// A configured `dir` turns on daily-rotated files next to the stderr output.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level, otherwise whatever
    /// [`LoggerBuilder::init`] reports.
    pub fn from_settings(name: &str, settings: &LogSettings) -> Result<Self, LoggerError> {
        let mut builder = Self::builder()
            .name(name)
            .level(parse_level(&settings.level)?)
            .console(settings.console);
        if let Some(filter) = &settings.env_filter {
            builder = builder.env_filter(filter);
        }
        let Some(dir) = &settings.dir else {
            return builder.init();
        };
        let rolling = builder.path(dir).max_files(settings.max_files);
        if settings.json { rolling.json().init() } else { rolling.init() }
    }

    pub fn flush(&self) {
        tracing::debug!(file_output = self.guard.is_some(), "Log flush requested");
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Closing log files");
        }
    }
}

fn stderr_layer() -> OutputLayer {
    fmt::layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed()
}

fn rolling_layer(
    name: &str,
    dir: &Path,
    options: &Options,
) -> Result<(OutputLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("log directory {}", dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(options.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_EXTENSION)
        .max_log_files(options.max_files)
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let plain = fmt::layer().with_ansi(false).with_writer(writer);
    let layer = if options.json { plain.json().boxed() } else { plain.boxed() };
    Ok((layer, guard))
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("unknown level '{level}': {e}").into(),
        context: None,
    })
}

fn check_options(name: &str, options: &Options) -> Result<(), LoggerError> {
    let problem = if name.trim().is_empty() {
        "name is blank"
    } else if options.max_files == 0 {
        "max_files is zero"
    } else {
        return Ok(());
    };
    Err(LoggerError::InvalidConfiguration { message: problem.into(), context: None })
}

fn env_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("bad filter '{directives}': {e}").into(),
                context: None,
            })
        },
    }
}
