//! Paperlabel Core - common infrastructure for the labeling pipeline
//!
//! Cooperative cancellation, progress reporting, and logging shared by
//! the extraction, classification, and batch crates.

pub mod cancel;
pub mod logging;
pub mod progress;

// Re-exports for convenience
pub use cancel::CancelToken;
pub use logging::init_logging;
pub use progress::{ProgressContext, SharedProgress};
