use config::{Config, Environment, File};
use satchel_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Custom error type for config loading.
#[satchel_derive::satchel_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `satchel.toml`). If no path is provided,
///    it defaults to `"satchel"` and lets the `config` crate pick the extension.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `SATCHEL__`. Nested structures use double underscores (e.g., `SATCHEL__LOG__LEVEL` maps
///    to `log.level`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use satchel_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, true)
}

/// Same layering as [`load_config`], but a missing file is not an error: the result is built
/// from environment overrides on top of `T`'s serde defaults.
///
/// # Errors
/// Returns [`ConfigError`] when an existing file or an override cannot be deserialized into `T`.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, false)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .with_context(|| format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    debug!(target_type = std::any::type_name::<T>(), "Config loaded");
    Ok(config)
}
