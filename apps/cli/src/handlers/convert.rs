use super::Reply;
use anyhow::{Context, Result};
use satchel::convert::{ConverterRegistry, TargetType, Value};
use tracing::debug;

/// Converts `value` to the named target. A `default` is first converted to the same target.
///
/// # Errors
/// Returns an error when the target name is unknown or no conversion path exists.
pub fn convert(
    registry: &ConverterRegistry,
    to: &str,
    value: &str,
    default: Option<&str>,
) -> Result<Reply> {
    let target: TargetType = to.parse().with_context(|| format!("Unknown target type '{to}'"))?;
    let custom_first = registry.custom_first();

    let default = default
        .map(|d| registry.convert(&target, &Value::from(d), None, custom_first))
        .transpose()
        .context("Default value is not convertible")?
        .filter(|d| !d.is_null());
    debug!(to = %target, value, has_default = default.is_some(), "Converting");

    let converted = registry.convert(&target, &Value::from(value), default, custom_first)?;
    Reply::of(&converted)
}
