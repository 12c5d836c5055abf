//! `plainmark rules`: show the substitution steps in the order they run.

use std::io::Write;

use anyhow::Result;
use plainmark_markdown::RULES;

use crate::terminal_output::{render_table, Column};

pub fn run<W: Write>(json: bool, color: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, RULES)?;
        writeln!(out)?;
        return Ok(());
    }

    let columns = [Column::right("#"), Column::left("Rule"), Column::left("Pattern")];
    let rows: Vec<Vec<String>> = RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| vec![(i + 1).to_string(), rule.name.to_string(), rule.pattern.to_string()])
        .collect();
    write!(out, "{}", render_table(&columns, &rows, color))?;
    Ok(())
}
