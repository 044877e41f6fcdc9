//! Plain text extraction.

use super::DocumentExtractor;
use crate::error::{MaskError, MaskResult};
use std::fs;
use std::path::Path;

/// Extractor for `.txt` files; reads the contents verbatim.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Creates a new plain text extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn name(&self) -> &'static str {
        "plain text"
    }

    fn extract(&self, path: &Path) -> MaskResult<String> {
        fs::read_to_string(path).map_err(|source| MaskError::io(path, source))
    }
}
