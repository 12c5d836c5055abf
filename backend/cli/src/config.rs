use std::collections::HashMap;
use std::path::PathBuf;

use plainmark_logging::{LogFormat, LogOptions};

use crate::error::CliError;

pub const ENV_LOG: &str = "PLAINMARK_LOG";
pub const ENV_LOG_FORMAT: &str = "PLAINMARK_LOG_FORMAT";
pub const ENV_LOG_DIR: &str = "PLAINMARK_LOG_DIR";
pub const ENV_PREVIEW_CHARS: &str = "PLAINMARK_PREVIEW_CHARS";

/// plainmark runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// Directory for rolling NDJSON logs; console only when unset
    pub log_dir: Option<PathBuf>,
    /// Default preview length in characters
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            log_dir: None,
            preview_chars: 160,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit variable set. Empty values count as unset.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        let mut config = Self::default();

        if let Some(level) = vars.get(ENV_LOG) {
            config.log_level = level.clone();
        }
        if let Some(format) = vars.get(ENV_LOG_FORMAT) {
            config.log_format = format
                .parse()
                .map_err(|reason| invalid(ENV_LOG_FORMAT, format, reason))?;
        }
        if let Some(dir) = vars.get(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(chars) = vars.get(ENV_PREVIEW_CHARS) {
            config.preview_chars = chars
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| invalid(ENV_PREVIEW_CHARS, chars, e.to_string()))?;
        }

        Ok(config)
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            level: self.log_level.clone(),
            format: self.log_format,
            dir: self.log_dir.clone(),
        }
    }
}

fn invalid(key: &str, value: &str, reason: String) -> CliError {
    CliError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    }
}
