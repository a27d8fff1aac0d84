//! Paperlabel Batch - the document labeling loop
//!
//! Enumerates a folder of PDFs, drives extraction and classification for
//! each document through the trait seams, accumulates one result row per
//! document, and writes the CSV report plus an end-of-run summary.

pub mod config;
pub mod report;
pub mod runner;
pub mod summary;

// Re-exports
pub use config::RunConfig;
pub use report::ResultRow;
pub use runner::{RunStatus, run};
pub use summary::Summary;
