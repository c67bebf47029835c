//! Configuration management for the address book binary.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. The library itself has no configuration; this only
//! controls how the demonstration binary logs.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn"), ignored when
    ///   `RUST_LOG` is set
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        // RUST_LOG drives the filter directly, so LOG_LEVEL is not consulted
        let log_level = match (env::var_os("RUST_LOG"), env::var("LOG_LEVEL")) {
            (None, Ok(val)) => Self::parse_log_level("LOG_LEVEL", &val)?,
            _ => Config::default().log_level,
        };

        Ok(Config { log_level })
    }

    /// Normalize and check a log level value.
    fn parse_log_level(var_name: &str, value: &str) -> ConfigResult<String> {
        let level = value.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), value),
            });
        }
        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
        }
    }
}
