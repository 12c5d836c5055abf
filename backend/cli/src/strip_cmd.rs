//! `plainmark strip`: print the plain-text rendering of a Markdown document.

use std::io::Write;

use anyhow::Result;
use plainmark_markdown::strip_markdown;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct StripOutput<'a> {
    text: &'a str,
}

pub fn run<W: Write>(input: &str, json: bool, out: &mut W) -> Result<()> {
    let text = strip_markdown(input);
    debug!(
        input_bytes = input.len(),
        output_bytes = text.len(),
        "Stripped markdown"
    );

    if json {
        serde_json::to_writer(&mut *out, &StripOutput { text: &text })?;
        writeln!(out)?;
    } else if !text.is_empty() {
        writeln!(out, "{text}")?;
    }
    Ok(())
}
