//! PDF text extraction.
//!
//! Pages are decoded and concatenated in document order. No layout or
//! provenance is preserved; the output is whatever text each page
//! yields, flattened into one string.

use super::DocumentExtractor;
use crate::error::{MaskError, MaskResult};
use std::path::Path;

/// Extractor for `.pdf` files backed by the `pdf-extract` crate.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Creates a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extensions(&self) -> &'static [&'static str] {
        &["pdf"]
    }

    fn name(&self) -> &'static str {
        "PDF"
    }

    fn extract(&self, path: &Path) -> MaskResult<String> {
        pdf_extract::extract_text(path).map_err(|err| MaskError::extraction(path, err))
    }
}
