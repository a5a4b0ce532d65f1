//! Facade crate for the Satchel utilities.
//! Re-exports every shared and infrastructure crate under one name.
//! Keep this crate thin: it composes the other crates, it does not implement helpers itself.
//!
//! ## Usage
//! - Add `satchel` and enable `io`/`net` (default) or `logger` as needed.
//! - Call [`init`] once with the loaded config to get a configured registry and validator.
//!
//! ```rust
//! use satchel::domain::config::SatchelConfig;
//!
//! let tools = satchel::init(&SatchelConfig::default());
//! assert!(tools.validator.is_birthday("1990-06-15"));
//! assert_eq!(tools.registry.convert_to::<i32>(&"7".into(), None).unwrap(), Some(7));
//! ```

use satchel_domain::config::SatchelConfig;

pub use satchel_collection as collection;
pub use satchel_convert as convert;
pub use satchel_date as date;
pub use satchel_domain as domain;
#[cfg(feature = "io")]
pub use satchel_io as io;
pub use satchel_kernel as kernel;
pub use satchel_lang as lang;
#[cfg(feature = "logger")]
pub use satchel_logger as logger;
#[cfg(feature = "net")]
pub use satchel_net as net;
pub use satchel_text as text;

/// Build-time enabled optional crates (by Cargo feature).
pub const ENABLED: &[&str] = &[
    #[cfg(feature = "io")]
    "io",
    #[cfg(feature = "net")]
    "net",
    #[cfg(feature = "logger")]
    "logger",
];

#[must_use]
pub fn is_enabled(name: &str) -> bool {
    ENABLED.contains(&name)
}

/// Config-driven instances of the stateful helpers.
#[derive(Debug)]
pub struct Toolkit {
    pub registry: convert::ConverterRegistry,
    pub validator: lang::Validator,
}

/// Builds the converter registry and validator from their config sections.
#[must_use]
pub fn init(config: &SatchelConfig) -> Toolkit {
    Toolkit {
        registry: convert::ConverterRegistry::with_settings(&config.convert),
        validator: lang::Validator::with_settings(&config.validate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_features() {
        assert!(is_enabled("io"));
        assert!(is_enabled("net"));
        assert!(!is_enabled("desktop"));
    }

    #[test]
    fn test_init_follows_config() {
        let mut config = SatchelConfig::default();
        config.validate.min_birth_year = 2000;
        let tools = init(&config);
        assert_eq!(tools.validator.min_birth_year(), 2000);
        assert!(tools.registry.custom_first());
    }
}
