//! paperlabel - zero-shot topic labeling for a folder of PDF papers
//!
//! Extracts (title, abstract) from each PDF with page-text heuristics and
//! classifies the pair against a fixed category list, writing one CSV row
//! per document.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "paperlabel")]
#[command(about = "Zero-shot topic labeling for a folder of PDF papers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: ./paperlabel.toml or ~/.config/paperlabel/config.toml)
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Label the PDFs in a folder
    Label(cmd::label::LabelArgs),
    /// Show current configuration
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Progress context (TTY auto-detect)
    let progress = Arc::new(paperlabel_core::ProgressContext::new());

    // Logging:
    //   TTY:     quiet (warn) unless --debug; the progress bar shows activity
    //   non-TTY: info unless --debug; logs are the only progress indicator
    let is_tty = progress.is_tty();
    let multi = if is_tty { Some(progress.multi()) } else { None };
    let quiet = if is_tty { !cli.debug } else { false };
    paperlabel_core::init_logging(quiet, cli.debug, multi);

    // Load configuration
    let config = if let Some(path) = cli.config {
        Config::from_file(&path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Command::Label(args) => cmd::label::run(args, &config, &progress),
        Command::Config => {
            use comfy_table::{
                Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
            };

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_header(vec![
                    Cell::new("Setting").fg(Color::Cyan),
                    Cell::new("Value").fg(Color::Cyan),
                ]);

            table.add_row(vec![
                "Input folder",
                &config.input.folder.display().to_string(),
            ]);
            table.add_row(vec!["Output file", &config.output.file_name]);
            table.add_row(vec!["Categories", &config.categories.labels.join("\n")]);
            table.add_row(vec!["API URL", &config.api.url]);
            table.add_row(vec![
                "API key",
                if config.api.api_key.is_some() {
                    "configured"
                } else {
                    "not set"
                },
            ]);
            table.add_row(vec![
                "Model dir",
                &config
                    .model
                    .dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_else(|| "not set".to_string()),
            ]);

            eprintln!("\n{table}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
