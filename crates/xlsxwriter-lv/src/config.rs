//! Adapter configuration

use std::env;

use lazy_static::lazy_static;

use crate::encoding::{encoding_for_codepage, Converter};

/// Environment variable selecting the legacy code page
pub const CODEPAGE_VAR: &str = "XLSXWRITER_LV_CODEPAGE";

/// Environment variable enabling strict conversion
pub const STRICT_VAR: &str = "XLSXWRITER_LV_STRICT";

/// Code page used when none is configured (Windows Western European)
pub const DEFAULT_CODEPAGE: u16 = 1252;

/// What to do with text that cannot be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionMode {
    /// Forward the caller's original bytes and let the call proceed
    #[default]
    Lenient,
    /// Skip the library call and report a parameter validation error
    Strict,
}

/// Settings shared by every exported wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    pub codepage: u16,
    pub mode: ConversionMode,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            codepage: DEFAULT_CODEPAGE,
            mode: ConversionMode::Lenient,
        }
    }
}

impl AdapterConfig {
    /// Read the configuration from the process environment.
    ///
    /// Invalid values are logged and the defaults kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(CODEPAGE_VAR) {
            match value.trim().parse::<u16>() {
                Ok(codepage) if encoding_for_codepage(codepage).is_some() => {
                    config.codepage = codepage;
                }
                _ => log::warn!(
                    "{CODEPAGE_VAR}={value:?} is not a supported code page, using {DEFAULT_CODEPAGE}"
                ),
            }
        }

        if let Some(value) = lookup(STRICT_VAR) {
            match parse_flag(&value) {
                Some(true) => config.mode = ConversionMode::Strict,
                Some(false) => {}
                None => log::warn!("{STRICT_VAR}={value:?} is not a boolean, ignoring"),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

lazy_static! {
    /// Process-wide configuration, read once on first use
    pub static ref CONFIG: AdapterConfig = AdapterConfig::from_env();

    static ref CONVERTER: Converter = Converter::new(&CONFIG);
}

/// Converter used by the exported wrappers
pub fn converter() -> &'static Converter {
    &CONVERTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AdapterConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AdapterConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, AdapterConfig::default());
        assert_eq!(config.codepage, 1252);
        assert_eq!(config.mode, ConversionMode::Lenient);
    }

    #[test]
    fn test_codepage_and_strict() {
        let config = config_from(&[(CODEPAGE_VAR, "932"), (STRICT_VAR, "Yes")]);
        assert_eq!(config.codepage, 932);
        assert_eq!(config.mode, ConversionMode::Strict);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let config = config_from(&[(CODEPAGE_VAR, "437"), (STRICT_VAR, "maybe")]);
        assert_eq!(config, AdapterConfig::default());

        let config = config_from(&[(CODEPAGE_VAR, "cp1251")]);
        assert_eq!(config.codepage, DEFAULT_CODEPAGE);
    }
}
