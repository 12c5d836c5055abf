//! `plainmark blocks`: list the fenced code blocks of a document.

use std::io::Write;

use anyhow::Result;
use plainmark_markdown::extract_code_blocks;
use tracing::debug;

use crate::terminal_output::{paint, CYAN};

pub fn run<W: Write>(input: &str, json: bool, color: bool, out: &mut W) -> Result<()> {
    let blocks = extract_code_blocks(input);
    debug!(input_bytes = input.len(), blocks = blocks.len(), "Extracted code blocks");

    if json {
        serde_json::to_writer(&mut *out, &blocks)?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let lang = block.language.as_deref().unwrap_or("text");
        let header = format!("--- block {} ({lang}) ---", i + 1);
        writeln!(out, "{}", paint(&header, CYAN, color))?;
        writeln!(out, "{}", block.content)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Setup:\n```bash\nnpm ci\n```\nThen:\n```\nnpm run dev\n```";

    #[test]
    fn lists_blocks_as_text() {
        let mut buf = Vec::new();
        run(DOC, false, false, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "--- block 1 (bash) ---\nnpm ci\n\n--- block 2 (text) ---\nnpm run dev\n"
        );
    }

    #[test]
    fn lists_blocks_as_json() {
        let mut buf = Vec::new();
        run(DOC, true, false, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["language"], "bash");
        assert_eq!(value[1]["language"], serde_json::Value::Null);
        assert_eq!(value[1]["content"], "npm run dev");
    }

    #[test]
    fn no_blocks_prints_nothing() {
        let mut buf = Vec::new();
        run("just prose", false, false, &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
