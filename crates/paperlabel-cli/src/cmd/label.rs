//! Label subcommand - run the batch over a folder of PDFs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use paperlabel_batch::RunConfig;
use paperlabel_classify::{RemoteClassifier, ZeroShotClassifier};
use paperlabel_core::{CancelToken, SharedProgress};
use paperlabel_extract::PdfExtractor;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Folder containing the PDFs (default: from config)
    pub folder: Option<PathBuf>,

    /// Classification strategy
    #[arg(short, long, value_enum, default_value = "remote")]
    pub strategy: Strategy,

    /// Report file name, written inside the input folder
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory holding model.onnx and tokenizer.json (local strategy)
    #[arg(long)]
    pub model_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Strategy {
    /// Hosted zero-shot inference endpoint
    Remote,
    /// Local ONNX pipeline (requires the local-model build feature)
    Local,
}

pub fn run(args: LabelArgs, config: &Config, progress: &SharedProgress) -> Result<ExitCode> {
    let classifier = build_classifier(args.strategy, args.model_dir, config, progress)?;

    let run_config = RunConfig {
        folder: args.folder.unwrap_or_else(|| config.input.folder.clone()),
        output_name: args
            .output
            .unwrap_or_else(|| config.output.file_name.clone()),
        categories: config.categories.labels.clone(),
    };
    anyhow::ensure!(
        run_config.folder.is_dir(),
        "Input folder does not exist: {}",
        run_config.folder.display()
    );

    let token = CancelToken::new();
    token
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    let status = paperlabel_batch::run(
        &run_config,
        &PdfExtractor::new(),
        classifier.as_ref(),
        &token,
        progress,
    )?;
    Ok(status.exit_code())
}

fn build_classifier(
    strategy: Strategy,
    model_dir: Option<PathBuf>,
    config: &Config,
    progress: &SharedProgress,
) -> Result<Box<dyn ZeroShotClassifier>> {
    match strategy {
        Strategy::Remote => {
            if config.api.api_key.is_none() {
                log::warn!(
                    "No API key configured; every document will be labeled Authentication Error"
                );
            }
            Ok(Box::new(RemoteClassifier::new(
                config.api.url.clone(),
                config.api.api_key.clone(),
            )))
        }
        Strategy::Local => load_local(model_dir, config, progress),
    }
}

#[cfg(feature = "local-model")]
fn load_local(
    model_dir: Option<PathBuf>,
    config: &Config,
    progress: &SharedProgress,
) -> Result<Box<dyn ZeroShotClassifier>> {
    let dir = model_dir
        .or_else(|| config.model.dir.clone())
        .context("Local strategy needs --model-dir or [model] dir in the config")?;

    let line = progress.stage_line("model");
    line.set_message(format!("loading {}", dir.display()));
    let classifier = paperlabel_classify::LocalClassifier::load(&dir, config.model.intra_threads)
        .with_context(|| format!("Failed to load local model from {}", dir.display()))?;
    line.finish_and_clear();

    Ok(Box::new(classifier))
}

#[cfg(not(feature = "local-model"))]
fn load_local(
    _model_dir: Option<PathBuf>,
    _config: &Config,
    _progress: &SharedProgress,
) -> Result<Box<dyn ZeroShotClassifier>> {
    anyhow::bail!(
        "This build does not include the local strategy; rebuild with --features local-model"
    )
}
