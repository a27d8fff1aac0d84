//! Structured classification outcome
//!
//! The outcome stays structured inside the pipeline; sentinel strings
//! appear only at the reporting boundary via [`Outcome::label`].

use crate::{ClassifyError, ScoredLabel};

#[derive(Debug)]
pub enum Outcome {
    /// The classifier committed to a category
    Labeled { label: String, confidence: f32 },
    /// A ranking was produced but the top score did not clear the floor
    LowConfidence { score: f32 },
    /// Title or abstract absent; the classifier was never invoked
    MissingMetadata,
    /// Classification was attempted and failed
    Failed(ClassifyError),
}

impl Outcome {
    /// Display string for the report's label column.
    pub fn label(&self) -> &str {
        match self {
            Self::Labeled { label, .. } => label,
            Self::LowConfidence { .. } => "Low Confidence",
            Self::MissingMetadata => "Missing Metadata",
            Self::Failed(err) => err.sentinel(),
        }
    }
}

/// Map a strategy result to an outcome, applying the strategy's
/// confidence floor.
///
/// A floor of `None` accepts the top label unconditionally (the remote
/// service is treated as authoritative); `Some(floor)` requires the top
/// score to strictly exceed the floor.
pub fn resolve(result: Result<Vec<ScoredLabel>, ClassifyError>, floor: Option<f32>) -> Outcome {
    let ranking = match result {
        Ok(ranking) => ranking,
        Err(err) => return Outcome::Failed(err),
    };
    let Some(top) = ranking.into_iter().next() else {
        return Outcome::Failed(ClassifyError::Model("empty ranking".to_string()));
    };
    match floor {
        Some(floor) if top.score <= floor => Outcome::LowConfidence { score: top.score },
        _ => Outcome::Labeled {
            label: top.label,
            confidence: top.score,
        },
    }
}
