//! Batch orchestration: enumerate, extract, classify, report
//!
//! Single-threaded by design: documents are processed strictly one at a
//! time and the cancellation token is polled between documents, so
//! cancellation granularity is one whole document.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use paperlabel_classify::{Outcome, ZeroShotClassifier, build_input, resolve};
use paperlabel_core::{CancelToken, SharedProgress};
use paperlabel_extract::MetadataExtractor;

use crate::config::RunConfig;
use crate::report::{self, ResultRow};
use crate::summary::Summary;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every enumerated document was visited and the report written
    Completed,
    /// Interrupted; the report covers the documents processed so far
    Cancelled,
    /// The folder held no PDFs; no report was written
    NoInput,
}

impl RunStatus {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Completed | Self::NoInput => ExitCode::SUCCESS,
            Self::Cancelled => ExitCode::from(130),
        }
    }
}

/// Run the labeling batch over every PDF in the configured folder.
///
/// Exactly one row per visited document, in enumeration order (directory
/// order; not stable across runs). Failures degrade to sentinel labels
/// per document and never abort the run.
pub fn run(
    config: &RunConfig,
    extractor: &dyn MetadataExtractor,
    classifier: &dyn ZeroShotClassifier,
    token: &CancelToken,
    progress: &SharedProgress,
) -> Result<RunStatus> {
    let pdf_files = enumerate_pdfs(&config.folder)?;
    if pdf_files.is_empty() {
        log::warn!("No PDF files found in {}", config.folder.display());
        return Ok(RunStatus::NoInput);
    }
    log::info!(
        "{} papers to label in {}",
        pdf_files.len(),
        config.folder.display()
    );

    let bar = progress.batch_bar("Labeling papers", pdf_files.len() as u64);
    let mut rows: Vec<ResultRow> = Vec::with_capacity(pdf_files.len());
    let mut cancelled = false;

    for pdf_file in pdf_files {
        if token.is_cancelled() {
            log::warn!("Interruption received, saving progress and exiting");
            cancelled = true;
            break;
        }

        bar.set_message(pdf_file.clone());
        let metadata = extractor.extract(&config.folder.join(&pdf_file));

        let outcome = match (&metadata.title, &metadata.abstract_text) {
            (Some(title), Some(abstract_text)) => {
                log::info!("Processing: {title}");
                let input = build_input(title, abstract_text);
                let outcome = resolve(
                    classifier.classify(&input, &config.categories),
                    classifier.confidence_floor(),
                );
                match &outcome {
                    Outcome::Labeled { label, confidence } => {
                        log::info!("Assigned label: {label} (confidence {confidence:.2})");
                    }
                    Outcome::LowConfidence { score } => {
                        log::info!("Low confidence ({score:.2}), rejecting top label");
                    }
                    Outcome::Failed(err) => log::warn!("{pdf_file}: {err}"),
                    Outcome::MissingMetadata => {}
                }
                outcome
            }
            _ => Outcome::MissingMetadata,
        };

        rows.push(ResultRow {
            pdf_file,
            metadata,
            outcome,
        });
        bar.inc(1);
    }
    bar.finish_and_clear();

    let report_path = config.report_path();
    report::write_csv(&report_path, &rows)?;
    log::info!(
        "Labeling complete, results saved to {}",
        report_path.display()
    );

    let summary = Summary::from_rows(&rows);
    if progress.is_tty() {
        progress.println(summary.render());
    } else {
        summary.log();
    }

    Ok(if cancelled {
        RunStatus::Cancelled
    } else {
        RunStatus::Completed
    })
}

/// List `*.pdf` entries in directory order.
///
/// Order is whatever the OS returns; files added after enumeration are
/// not picked up.
fn enumerate_pdfs(folder: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("Cannot read input folder {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(".pdf") && entry.path().is_file() {
            files.push(name);
        }
    }
    Ok(files)
}
