mod blocks_cmd;
mod config;
mod error;
mod input;
mod preview_cmd;
mod rules_cmd;
mod strip_cmd;
mod terminal_output;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plainmark_markdown::PreviewOptions;
use tracing::debug;

use config::Config;

#[derive(Parser)]
#[command(name = "plainmark")]
#[command(about = "Render Markdown as readable plain text")]
#[command(version)]
struct Cli {
    /// Log filter, overrides PLAINMARK_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip Markdown formatting from FILE (or stdin)
    Strip {
        /// Input file; `-` or absent reads stdin
        file: Option<PathBuf>,
    },
    /// Print a shortened plain-text preview
    Preview {
        file: Option<PathBuf>,
        /// Maximum characters before the ellipsis (default: PLAINMARK_PREVIEW_CHARS)
        #[arg(short, long)]
        max_chars: Option<usize>,
        /// Keep line breaks instead of folding to one line
        #[arg(long)]
        multi_line: bool,
        /// Suffix for truncated previews
        #[arg(long)]
        ellipsis: Option<String>,
    },
    /// List fenced code blocks
    Blocks { file: Option<PathBuf> },
    /// Show the stripping rules in application order
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    plainmark_logging::init_logger(&config.log_options())
        .context("Failed to initialize logging")?;
    debug!(?config, "Configuration loaded");

    let color = io::stdout().is_terminal() && terminal_output::supports_color();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Strip { file } => {
            let text = input::read_input(file.as_deref())?;
            strip_cmd::run(&text, cli.json, &mut out)?;
        }
        Commands::Preview {
            file,
            max_chars,
            multi_line,
            ellipsis,
        } => {
            let text = input::read_input(file.as_deref())?;
            let defaults = PreviewOptions::default();
            let options = PreviewOptions {
                max_chars: max_chars.unwrap_or(config.preview_chars),
                ellipsis: ellipsis.unwrap_or(defaults.ellipsis),
                single_line: !multi_line,
            };
            preview_cmd::run(&text, &options, cli.json, &mut out)?;
        }
        Commands::Blocks { file } => {
            let text = input::read_input(file.as_deref())?;
            blocks_cmd::run(&text, cli.json, color, &mut out)?;
        }
        Commands::Rules => rules_cmd::run(cli.json, color, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_preview_flags() {
        let cli = Cli::try_parse_from([
            "plainmark", "--json", "preview", "notes.md", "-m", "40", "--multi-line",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Preview {
                file,
                max_chars,
                multi_line,
                ellipsis,
            } => {
                assert_eq!(file, Some(PathBuf::from("notes.md")));
                assert_eq!(max_chars, Some(40));
                assert!(multi_line);
                assert!(ellipsis.is_none());
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["plainmark", "strip", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Strip { file: None }));
    }
}
