//! Classification error taxonomy
//!
//! Every variant maps to a sentinel label at the reporting boundary; none
//! of them aborts the batch.

#[derive(Debug)]
pub enum ClassifyError {
    /// No API credential configured; detected before any network call
    MissingCredential,
    /// Non-success HTTP status from the inference endpoint
    Api { status: u16, message: String },
    /// The service answered but reported a model-side error
    Model(String),
    /// Network failure or malformed response
    Transport(String),
    /// Local inference failure
    Inference(String),
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "API credential not configured"),
            Self::Api { status, message } => write!(f, "API error (status {status}): {message}"),
            Self::Model(msg) => write!(f, "model error: {msg}"),
            Self::Transport(msg) => write!(f, "request failed: {msg}"),
            Self::Inference(msg) => write!(f, "inference failed: {msg}"),
        }
    }
}

impl std::error::Error for ClassifyError {}

impl ClassifyError {
    /// Sentinel label rendered into the report for this failure.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::MissingCredential => "Authentication Error",
            Self::Api { .. } => "API Error",
            Self::Model(_) => "Model Error",
            Self::Transport(_) | Self::Inference(_) => "Classification Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_match_error_kinds() {
        assert_eq!(
            ClassifyError::MissingCredential.sentinel(),
            "Authentication Error"
        );
        assert_eq!(
            ClassifyError::Api {
                status: 503,
                message: "down".into()
            }
            .sentinel(),
            "API Error"
        );
        assert_eq!(
            ClassifyError::Model("loading".into()).sentinel(),
            "Model Error"
        );
        assert_eq!(
            ClassifyError::Transport("reset".into()).sentinel(),
            "Classification Error"
        );
        assert_eq!(
            ClassifyError::Inference("oom".into()).sentinel(),
            "Classification Error"
        );
    }

    #[test]
    fn display_includes_status() {
        let err = ClassifyError::Api {
            status: 429,
            message: "rate limited".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("429"));
        assert!(msg.contains("rate limited"));
    }
}
