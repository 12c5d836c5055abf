//! Structured Logger
//!
//! Wraps `tracing` with a console layer (plain or JSON), an optional daily
//! rolling NDJSON file, and `RUST_LOG`-based level control.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt as layer_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format `{other}` (expected `pretty` or `json`)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `warn` or `plainmark=debug`.
    pub level: String,
    pub format: LogFormat,
    /// When set, also writes NDJSON to `<dir>/plainmark.log.YYYY-MM-DD`.
    pub dir: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            dir: None,
        }
    }
}

/// The rolling log file could not be created.
#[derive(Debug, Error)]
#[error("cannot open log directory {}", dir.display())]
pub struct LogInitError {
    pub dir: PathBuf,
    source: InitError,
}

/// Initialize the global structured logger.
///
/// Returns `Ok(false)` if a global subscriber was already installed. Nothing
/// is installed when the log directory cannot be opened.
pub fn init_logger(options: &LogOptions) -> Result<bool, LogInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&options.level));

    let file_layer = options
        .dir
        .as_ref()
        .map(|dir| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("plainmark.log")
                .build(dir)
                .map_err(|source| LogInitError {
                    dir: dir.clone(),
                    source,
                })
        })
        .transpose()?
        .map(|appender| {
            layer_fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
        });

    let (plain_layer, json_layer) = match options.format {
        LogFormat::Pretty => (
            Some(
                layer_fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(layer_fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };

    Ok(tracing_subscriber::registry()
        .with(env_filter)
        .with(plain_layer)
        .with(json_layer)
        .with(file_layer)
        .try_init()
        .is_ok())
}
