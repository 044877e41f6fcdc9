//! Document text extraction.
//!
//! Extraction flattens a format-specific document into a single text
//! string, with page, paragraph, and row boundaries reduced to newlines.
//! Each supported format implements [`DocumentExtractor`]; dispatch is
//! by normalized file extension through an [`ExtractorRegistry`], so
//! adding a format means registering an extractor rather than editing a
//! dispatch function.

pub mod docx;
pub mod pdf;
pub mod sheet;
pub mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use sheet::SpreadsheetExtractor;
pub use text::PlainTextExtractor;

use crate::error::{MaskError, MaskResult};
use std::ffi::OsStr;
use std::path::Path;

/// A single document format's text extraction capability.
pub trait DocumentExtractor: Send + Sync {
    /// File extensions handled by this extractor, lowercase, without the
    /// leading dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Human-readable format name.
    fn name(&self) -> &'static str;

    /// Extracts the full text content of the document at `path`.
    fn extract(&self, path: &Path) -> MaskResult<String>;
}

/// Registry of extractors keyed by file extension.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn DocumentExtractor>>,
}

impl ExtractorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Creates a registry with the four built-in formats registered:
    /// PDF, DOCX, spreadsheet (xls/xlsx), and plain text.
    pub fn with_default_extractors() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PdfExtractor::new()));
        registry.register(Box::new(DocxExtractor::new()));
        registry.register(Box::new(SpreadsheetExtractor::new()));
        registry.register(Box::new(PlainTextExtractor::new()));
        registry
    }

    /// Registers an extractor. Later registrations take precedence for
    /// extensions claimed by more than one extractor.
    pub fn register(&mut self, extractor: Box<dyn DocumentExtractor>) {
        self.extractors.push(extractor);
    }

    /// All extensions the registry can dispatch on.
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        self.extractors
            .iter()
            .flat_map(|e| e.extensions().iter().copied())
            .collect()
    }

    fn find(&self, extension: &str) -> Option<&dyn DocumentExtractor> {
        self.extractors
            .iter()
            .rev()
            .find(|e| e.extensions().contains(&extension))
            .map(|extractor| extractor.as_ref())
    }

    /// Extracts the text of the document at `path`.
    ///
    /// The path's existence is checked before any dispatch, so a missing
    /// file always fails with [`MaskError::NotFound`] rather than a
    /// parser error. An extension outside the registry fails with
    /// [`MaskError::UnsupportedFormat`] naming the extension.
    pub fn extract(&self, path: &Path) -> MaskResult<String> {
        if !path.exists() {
            return Err(MaskError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .unwrap_or_default();

        let extractor = self
            .find(&extension)
            .ok_or_else(|| MaskError::UnsupportedFormat(format!(".{extension}")))?;

        extractor.extract(path)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_default_extractors()
    }
}
