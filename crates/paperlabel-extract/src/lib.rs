//! Paperlabel Extract - best-effort (title, abstract) extraction from PDFs
//!
//! The heuristics operate on rendered page text: the title is the first
//! line of page one, the abstract is the span following an "Abstract"
//! marker on one of the first three pages. Unreadable documents degrade
//! to empty metadata rather than errors.

pub mod metadata;
pub mod pdf;

// Re-exports
pub use metadata::Metadata;
pub use pdf::{MetadataExtractor, PdfExtractor};
