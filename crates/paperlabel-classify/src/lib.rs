//! Paperlabel Classify - zero-shot topic classification strategies
//!
//! Two interchangeable strategies implement [`ZeroShotClassifier`]: a
//! remote Hugging Face Inference API call ([`RemoteClassifier`]) and a
//! local ONNX NLI pipeline ([`LocalClassifier`], feature `local-model`).
//! The batch runner depends only on the trait and on [`outcome::resolve`].

pub mod error;
mod http;
pub mod input;
#[cfg(feature = "local-model")]
pub mod local;
pub mod outcome;
pub mod remote;

// Re-exports
pub use error::ClassifyError;
pub use input::build_input;
#[cfg(feature = "local-model")]
pub use local::LocalClassifier;
pub use outcome::{Outcome, resolve};
pub use remote::RemoteClassifier;

/// One (label, score) pair from a classification ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f32,
}

/// Zero-shot classification capability.
///
/// Returns the full ranking ordered by descending score; the top entry is
/// authoritative. `confidence_floor` is the strategy's optional gate: a
/// top score at or below the floor becomes a low-confidence outcome
/// instead of a label. The gate is applied by [`outcome::resolve`], not by
/// the strategy itself, so the boundary stays testable without a model.
pub trait ZeroShotClassifier {
    fn classify(
        &self,
        text: &str,
        categories: &[String],
    ) -> Result<Vec<ScoredLabel>, ClassifyError>;

    fn confidence_floor(&self) -> Option<f32> {
        None
    }
}
