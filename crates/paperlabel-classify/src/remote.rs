//! Remote zero-shot classification via the Hugging Face Inference API

use serde::{Deserialize, Serialize};

use crate::http::{SHARED_RUNTIME, http_client};
use crate::{ClassifyError, ScoredLabel, ZeroShotClassifier};

/// Request payload for the zero-shot inference endpoint
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

/// Response body: parallel label/score arrays ordered by descending
/// score. An `error` field can accompany any status (model still loading,
/// invalid input).
#[derive(Debug, Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    scores: Vec<f32>,
    #[serde(default)]
    error: Option<String>,
}

/// Strategy A: hosted inference endpoint.
///
/// No confidence floor: the service's top label is accepted as-is.
pub struct RemoteClassifier {
    url: String,
    api_key: Option<String>,
}

impl RemoteClassifier {
    /// A missing key is not a construction error; it surfaces per document
    /// as an authentication failure without any network call.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            url: url.into(),
            api_key,
        }
    }

    fn request(
        &self,
        key: &str,
        text: &str,
        categories: &[String],
    ) -> Result<InferenceResponse, ClassifyError> {
        let payload = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                candidate_labels: categories,
                multi_label: false,
            },
        };

        let result: Result<(u16, String), reqwest::Error> =
            SHARED_RUNTIME.handle().block_on(async {
                let resp = http_client()
                    .post(&self.url)
                    .bearer_auth(key)
                    .json(&payload)
                    .send()
                    .await?;
                let status = resp.status().as_u16();
                let body = resp.text().await?;
                Ok((status, body))
            });

        let (status, body) = result.map_err(|e| ClassifyError::Transport(e.to_string()))?;

        // The error body is JSON when the service itself answered, but a
        // gateway may return HTML; the status code alone decides the kind.
        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<InferenceResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(ClassifyError::Api { status, message });
        }

        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| ClassifyError::Transport(format!("invalid response JSON: {e}")))?;
        if let Some(message) = parsed.error {
            return Err(ClassifyError::Model(message));
        }
        Ok(parsed)
    }
}

impl ZeroShotClassifier for RemoteClassifier {
    fn classify(
        &self,
        text: &str,
        categories: &[String],
    ) -> Result<Vec<ScoredLabel>, ClassifyError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ClassifyError::MissingCredential);
        };

        let response = self.request(key, text, categories)?;
        if response.labels.is_empty() || response.labels.len() != response.scores.len() {
            return Err(ClassifyError::Transport(
                "mismatched labels/scores arrays".to_string(),
            ));
        }

        Ok(response
            .labels
            .into_iter()
            .zip(response.scores)
            .map(|(label, score)| ScoredLabel { label, score })
            .collect())
    }
}
