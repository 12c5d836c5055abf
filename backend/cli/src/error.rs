use std::io;

use thiserror::Error;

/// Errors surfaced by the `plainmark` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read input from {path}")]
    ReadInput { path: String, source: io::Error },

    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}
