/// Code carried by a successful [`ResultVo`](crate::result::ResultVo).
pub const SUCCESS_CODE: i32 = 0;
pub const SUCCESS_MESSAGE: &str = "success";

/// Prefix for environment overrides, e.g. `SATCHEL__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "SATCHEL";
pub const DEFAULT_CONFIG_FILE: &str = "satchel";

pub const DEFAULT_BUFFER_SIZE: usize = 2 << 12;
pub const DEFAULT_MIN_BIRTH_YEAR: i32 = 1900;
