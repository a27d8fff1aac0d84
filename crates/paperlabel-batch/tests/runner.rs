//! Batch runner integration tests with stub extraction and classification.

use std::path::Path;
use std::sync::{Arc, Mutex};

use paperlabel_batch::{RunConfig, RunStatus, run};
use paperlabel_classify::{ClassifyError, ScoredLabel, ZeroShotClassifier};
use paperlabel_core::{CancelToken, ProgressContext, SharedProgress};
use paperlabel_extract::{Metadata, MetadataExtractor};

/// Derives metadata from the file name; "broken*" files yield nothing.
#[derive(Default)]
struct RecordingExtractor {
    calls: Mutex<Vec<String>>,
}

impl MetadataExtractor for RecordingExtractor {
    fn extract(&self, path: &Path) -> Metadata {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        self.calls.lock().unwrap().push(name.clone());
        if name.starts_with("broken") {
            return Metadata::none();
        }
        let stem = name.trim_end_matches(".pdf");
        Metadata {
            title: Some(format!("Title of {stem}")),
            abstract_text: Some(format!("Abstract of {stem}")),
        }
    }
}

/// Always ranks the first category on top with a fixed score.
struct StubClassifier {
    inputs: Mutex<Vec<String>>,
    score: f32,
    floor: Option<f32>,
    fail: Option<fn() -> ClassifyError>,
    cancel_after: Option<(usize, CancelToken)>,
}

impl StubClassifier {
    fn new(score: f32) -> Self {
        Self {
            inputs: Mutex::new(Vec::new()),
            score,
            floor: None,
            fail: None,
            cancel_after: None,
        }
    }
}

impl ZeroShotClassifier for StubClassifier {
    fn classify(
        &self,
        text: &str,
        categories: &[String],
    ) -> Result<Vec<ScoredLabel>, ClassifyError> {
        let mut inputs = self.inputs.lock().unwrap();
        inputs.push(text.to_string());
        if let Some((after, token)) = &self.cancel_after {
            if inputs.len() >= *after {
                token.cancel();
            }
        }
        if let Some(make_err) = self.fail {
            return Err(make_err());
        }
        Ok(vec![ScoredLabel {
            label: categories[0].clone(),
            score: self.score,
        }])
    }

    fn confidence_floor(&self) -> Option<f32> {
        self.floor
    }
}

fn categories() -> Vec<String> {
    [
        "Graph-Based Learning",
        "Optimization Algorithms",
        "Machine Learning Theory",
        "Reinforcement Learning & Bandits",
        "Applied AI in Healthcare & Web Systems",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn setup(dir: &Path, files: &[&str]) -> RunConfig {
    for file in files {
        std::fs::write(dir.join(file), b"%PDF-1.5 stub").unwrap();
    }
    RunConfig {
        folder: dir.to_path_buf(),
        output_name: "out.csv".to_string(),
        categories: categories(),
    }
}

fn progress() -> SharedProgress {
    Arc::new(ProgressContext::new())
}

fn data_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(String::from)
        .collect()
}

#[test]
fn one_row_per_document_in_visit_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["a.pdf", "b.pdf", "c.pdf"]);
    let extractor = RecordingExtractor::default();
    let classifier = StubClassifier::new(0.92);

    let status = run(
        &config,
        &extractor,
        &classifier,
        &CancelToken::new(),
        &progress(),
    )
    .unwrap();

    assert_eq!(status, RunStatus::Completed);
    let rows = data_lines(&config.report_path());
    assert_eq!(rows.len(), 3);

    // Rows appear in the same order documents were visited
    let visited = extractor.calls.lock().unwrap().clone();
    let row_files: Vec<String> = rows
        .iter()
        .map(|l| l.split(',').next().unwrap().to_string())
        .collect();
    assert_eq!(row_files, visited);

    // Classifier saw "title. abstract" inputs
    let inputs = classifier.inputs.lock().unwrap();
    assert_eq!(inputs.len(), 3);
    assert!(inputs[0].starts_with("Title of "));
    assert!(inputs[0].contains(". Abstract of "));
}

#[test]
fn labeled_row_matches_stub_ranking() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["routing.pdf"]);
    let extractor = RecordingExtractor::default();
    let classifier = StubClassifier::new(0.92);

    run(
        &config,
        &extractor,
        &classifier,
        &CancelToken::new(),
        &progress(),
    )
    .unwrap();

    let rows = data_lines(&config.report_path());
    assert_eq!(
        rows[0],
        "routing.pdf,Title of routing,Abstract of routing,Graph-Based Learning"
    );
}

#[test]
fn missing_metadata_skips_the_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["broken.pdf"]);
    let extractor = RecordingExtractor::default();
    let classifier = StubClassifier::new(0.92);

    run(
        &config,
        &extractor,
        &classifier,
        &CancelToken::new(),
        &progress(),
    )
    .unwrap();

    assert!(classifier.inputs.lock().unwrap().is_empty());
    let rows = data_lines(&config.report_path());
    assert_eq!(rows, vec!["broken.pdf,,,Missing Metadata".to_string()]);
}

#[test]
fn cancellation_stops_after_current_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["1.pdf", "2.pdf", "3.pdf", "4.pdf", "5.pdf"]);
    let extractor = RecordingExtractor::default();
    let token = CancelToken::new();
    let mut classifier = StubClassifier::new(0.9);
    classifier.cancel_after = Some((2, token.clone()));

    let status = run(&config, &extractor, &classifier, &token, &progress()).unwrap();

    assert_eq!(status, RunStatus::Cancelled);
    // Documents after the cancellation point are never extracted or classified
    assert_eq!(extractor.calls.lock().unwrap().len(), 2);
    assert_eq!(classifier.inputs.lock().unwrap().len(), 2);
    // Partial report still written, in original order
    assert_eq!(data_lines(&config.report_path()).len(), 2);
}

#[test]
fn empty_folder_writes_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &[]);
    let extractor = RecordingExtractor::default();
    let classifier = StubClassifier::new(0.9);

    let status = run(
        &config,
        &extractor,
        &classifier,
        &CancelToken::new(),
        &progress(),
    )
    .unwrap();

    assert_eq!(status, RunStatus::NoInput);
    assert!(!config.report_path().exists());
}

#[test]
fn non_pdf_entries_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["paper.pdf"]);
    std::fs::write(dir.path().join("notes.txt"), b"not a pdf").unwrap();
    std::fs::write(dir.path().join("paper.pdf.bak"), b"backup").unwrap();
    let extractor = RecordingExtractor::default();
    let classifier = StubClassifier::new(0.9);

    run(
        &config,
        &extractor,
        &classifier,
        &CancelToken::new(),
        &progress(),
    )
    .unwrap();

    assert_eq!(data_lines(&config.report_path()).len(), 1);
}

#[test]
fn missing_credential_labels_every_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["a.pdf", "b.pdf"]);
    let extractor = RecordingExtractor::default();
    let mut classifier = StubClassifier::new(0.9);
    classifier.fail = Some(|| ClassifyError::MissingCredential);

    run(
        &config,
        &extractor,
        &classifier,
        &CancelToken::new(),
        &progress(),
    )
    .unwrap();

    let rows = data_lines(&config.report_path());
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.ends_with(",Authentication Error")));
}

#[test]
fn floor_rejects_low_scores() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["a.pdf"]);
    let extractor = RecordingExtractor::default();
    let mut classifier = StubClassifier::new(0.25);
    classifier.floor = Some(0.3);

    run(
        &config,
        &extractor,
        &classifier,
        &CancelToken::new(),
        &progress(),
    )
    .unwrap();

    let rows = data_lines(&config.report_path());
    assert!(rows[0].ends_with(",Low Confidence"));
}

#[test]
fn rerun_over_unchanged_folder_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path(), &["a.pdf", "b.pdf", "c.pdf"]);

    let first = {
        let extractor = RecordingExtractor::default();
        let classifier = StubClassifier::new(0.9);
        run(
            &config,
            &extractor,
            &classifier,
            &CancelToken::new(),
            &progress(),
        )
        .unwrap();
        std::fs::read_to_string(config.report_path()).unwrap()
    };
    let second = {
        let extractor = RecordingExtractor::default();
        let classifier = StubClassifier::new(0.9);
        run(
            &config,
            &extractor,
            &classifier,
            &CancelToken::new(),
            &progress(),
        )
        .unwrap();
        std::fs::read_to_string(config.report_path()).unwrap()
    };

    assert_eq!(first, second);
}
