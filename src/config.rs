use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Byte limit of one text component in the native text-command API.
pub const MAX_COMPONENT_BYTES: usize = 99;
pub const DEFAULT_TEXTURE: &str = "web_lossantospolicedept";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudConfig {
    pub max_component_bytes: usize,
    pub subtitle_duration_ms: u32,
    pub help_duration_ms: u32,
    pub help_sound: bool,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            max_component_bytes: MAX_COMPONENT_BYTES,
            subtitle_duration_ms: 2500,
            help_duration_ms: 5000,
            help_sound: true,
        }
    }
}

impl HudConfig {
    /// Defaults, overridden by `BASELIB_MAX_COMPONENT_BYTES`,
    /// `BASELIB_SUBTITLE_MS`, `BASELIB_HELP_MS` and `BASELIB_HELP_SOUND`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("BASELIB_MAX_COMPONENT_BYTES") {
            config.max_component_bytes = parse_value("BASELIB_MAX_COMPONENT_BYTES", &value)?;
        }
        if let Some(value) = lookup("BASELIB_SUBTITLE_MS") {
            config.subtitle_duration_ms = parse_value("BASELIB_SUBTITLE_MS", &value)?;
        }
        if let Some(value) = lookup("BASELIB_HELP_MS") {
            config.help_duration_ms = parse_value("BASELIB_HELP_MS", &value)?;
        }
        if let Some(value) = lookup("BASELIB_HELP_SOUND") {
            config.help_sound = parse_value("BASELIB_HELP_SOUND", &value)?;
        }

        if config.max_component_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "BASELIB_MAX_COMPONENT_BYTES",
                value: "0".to_string(),
            });
        }

        log::debug!("Loaded HUD config: {:?}", config);
        Ok(config)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
