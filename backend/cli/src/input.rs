//! Reads Markdown from a file or stdin.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::warn;

use crate::error::CliError;

/// Reads the whole input. `None` or `-` means stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => {
            let label = p.display().to_string();
            let file = File::open(p).map_err(|source| CliError::ReadInput {
                path: label.clone(),
                source,
            })?;
            read_from(file, &label)
        }
        _ => read_from(io::stdin().lock(), "<stdin>"),
    }
}

/// Reads everything from `reader`. Invalid UTF-8 is replaced, not rejected.
pub fn read_from<R: Read>(mut reader: R, label: &str) -> Result<String, CliError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| CliError::ReadInput {
            path: label.to_string(),
            source,
        })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(input = %label, "Input is not valid UTF-8; replacing invalid bytes");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
