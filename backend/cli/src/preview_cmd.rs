//! `plainmark preview`: print a shortened, single-line plain-text preview.

use std::io::Write;

use anyhow::Result;
use plainmark_markdown::{preview, PreviewOptions};
use tracing::debug;

pub fn run<W: Write>(input: &str, options: &PreviewOptions, json: bool, out: &mut W) -> Result<()> {
    let result = preview(input, options);
    debug!(
        input_bytes = input.len(),
        output_chars = result.text.chars().count(),
        max_chars = options.max_chars,
        truncated = result.truncated,
        "Built preview"
    );

    if json {
        serde_json::to_writer(&mut *out, &result)?;
        writeln!(out)?;
    } else if !result.text.is_empty() {
        writeln!(out, "{}", result.text)?;
    }
    Ok(())
}
