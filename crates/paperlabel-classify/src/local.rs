//! Local zero-shot classification via an ONNX MNLI cross-encoder
//!
//! Mirrors the zero-shot pipeline shape: each candidate category becomes
//! a hypothesis ("This paper discusses {category}."), the model scores
//! entailment of the document text against each hypothesis, and the
//! entailment logits are softmaxed across candidates (single-label
//! semantics). Scores at or below the floor are rejected as low
//! confidence rather than asserted.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::TensorRef;

use crate::{ClassifyError, ScoredLabel, ZeroShotClassifier};

/// Hypothesis phrasing for candidate categories
const HYPOTHESIS_TEMPLATE: &str = "This paper discusses {}.";

/// MNLI label order is contradiction/neutral/entailment
const ENTAILMENT_INDEX: usize = 2;

/// Top scores accepted only when strictly above this floor
const CONFIDENCE_FLOOR: f32 = 0.3;

/// Strategy B: local inference with a model held in memory for the run.
///
/// The session sits behind a `Mutex` because `ort::Session::run` takes
/// `&mut self` while the trait exposes `&self`.
pub struct LocalClassifier {
    session: Mutex<Session>,
    tokenizer: tokenizers::Tokenizer,
}

fn init_err(e: ort::Error) -> ClassifyError {
    ClassifyError::Inference(e.to_string())
}

impl LocalClassifier {
    /// Load `model.onnx` and `tokenizer.json` from `model_dir`.
    ///
    /// With the `cuda` feature the CUDA execution provider is registered
    /// first; ort falls back to CPU when it is unavailable.
    pub fn load(model_dir: &Path, intra_threads: usize) -> Result<Self, ClassifyError> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");
        for required in [&model_path, &tokenizer_path] {
            if !required.exists() {
                return Err(ClassifyError::Inference(format!(
                    "missing model file: {}",
                    required.display()
                )));
            }
        }

        let builder = Session::builder()
            .map_err(init_err)?
            .with_intra_threads(intra_threads)
            .map_err(init_err)?;
        #[cfg(feature = "cuda")]
        let builder = builder
            .with_execution_providers([
                ort::execution_providers::CUDAExecutionProvider::default().build(),
            ])
            .map_err(init_err)?;
        let session = builder.commit_from_file(&model_path).map_err(init_err)?;

        let tokenizer = tokenizers::Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassifyError::Inference(format!("tokenizer load failed: {e}")))?;

        log::info!("Local model loaded from {}", model_dir.display());
        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }

    /// Entailment logit for one (premise, hypothesis) pair.
    fn entailment_logit(&self, premise: &str, hypothesis: &str) -> Result<f32, ClassifyError> {
        let encoding = self
            .tokenizer
            .encode((premise, hypothesis), true)
            .map_err(|e| ClassifyError::Inference(format!("tokenization failed: {e}")))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let seq_len = input_ids.len();

        let ids_array = ndarray::Array2::from_shape_vec((1, seq_len), input_ids)
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;
        let mask_array = ndarray::Array2::from_shape_vec((1, seq_len), attention_mask)
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let ids_tensor = TensorRef::from_array_view(&ids_array).map_err(init_err)?;
        let mask_tensor = TensorRef::from_array_view(&mask_array).map_err(init_err)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifyError::Inference("session lock poisoned".to_string()))?;
        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| ClassifyError::Inference(format!("model run failed: {e}")))?;

        let (shape, logits) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifyError::Inference(format!("output extraction failed: {e}")))?;
        if logits.len() <= ENTAILMENT_INDEX {
            return Err(ClassifyError::Inference(format!(
                "unexpected output shape: {shape:?}"
            )));
        }
        Ok(logits[ENTAILMENT_INDEX])
    }
}

impl ZeroShotClassifier for LocalClassifier {
    fn classify(
        &self,
        text: &str,
        categories: &[String],
    ) -> Result<Vec<ScoredLabel>, ClassifyError> {
        if categories.is_empty() {
            return Err(ClassifyError::Inference(
                "no candidate categories".to_string(),
            ));
        }

        let mut logits = Vec::with_capacity(categories.len());
        for category in categories {
            let hypothesis = HYPOTHESIS_TEMPLATE.replace("{}", category);
            logits.push(self.entailment_logit(text, &hypothesis)?);
        }
        Ok(softmax_ranking(categories, &logits))
    }

    fn confidence_floor(&self) -> Option<f32> {
        Some(CONFIDENCE_FLOOR)
    }
}

/// Softmax entailment logits across candidates and sort descending.
fn softmax_ranking(categories: &[String], logits: &[f32]) -> Vec<ScoredLabel> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    let mut ranking: Vec<ScoredLabel> = categories
        .iter()
        .zip(&exps)
        .map(|(label, &e)| ScoredLabel {
            label: label.clone(),
            score: e / sum,
        })
        .collect();
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranking
}
