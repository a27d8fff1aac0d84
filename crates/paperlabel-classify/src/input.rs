//! Classification input assembly

/// Maximum classification input length in characters.
///
/// Bounds both remote request size and local model input uniformly.
pub const MAX_INPUT_CHARS: usize = 2000;

/// Concatenate title and abstract with a separating period, truncated to
/// the first [`MAX_INPUT_CHARS`] characters (char-boundary safe).
pub fn build_input(title: &str, abstract_text: &str) -> String {
    let mut combined = format!("{title}. {abstract_text}");
    if let Some((idx, _)) = combined.char_indices().nth(MAX_INPUT_CHARS) {
        combined.truncate(idx);
    }
    combined
}
