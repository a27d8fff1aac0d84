//! PDF-backed metadata extraction via lopdf

use std::path::Path;

use lopdf::Document;

use crate::metadata::{Metadata, abstract_from_page, title_from_page};

/// How many leading pages are scanned for an abstract
const ABSTRACT_PAGE_LIMIT: usize = 3;

/// Extraction seam between the batch runner and the PDF backend.
///
/// Extraction failure is a normal outcome: implementations return empty
/// metadata for unreadable documents instead of an error.
pub trait MetadataExtractor {
    fn extract(&self, path: &Path) -> Metadata;
}

/// Extractor over lopdf rendered page text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn try_extract(&self, path: &Path) -> Result<Metadata, lopdf::Error> {
        let doc = Document::load(path)?;
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();

        let title = match pages.first() {
            Some(&first) => title_from_page(&doc.extract_text(&[first])?),
            None => None,
        };

        let mut abstract_text = None;
        for &page in pages.iter().take(ABSTRACT_PAGE_LIMIT) {
            if let Some(found) = abstract_from_page(&doc.extract_text(&[page])?) {
                abstract_text = Some(found);
                // First match wins; later pages are never consulted
                break;
            }
        }

        Ok(Metadata {
            title,
            abstract_text,
        })
    }
}

impl MetadataExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Metadata {
        match self.try_extract(path) {
            Ok(meta) => meta,
            Err(err) => {
                log::warn!("Error processing {}: {err}", path.display());
                Metadata::none()
            }
        }
    }
}
