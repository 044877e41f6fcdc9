//! End-to-end masking pipeline.
//!
//! The pipeline ties the extractor registry, the word list, and the
//! mask rules together: resolve three paths, extract, mask, write. The
//! core is [`MaskPipeline::mask_document`], which performs no output
//! IO so the interactive layer can stay a thin adapter around it.

use crate::config::SensitiveWordList;
use crate::error::{MaskError, MaskResult};
use crate::extract::ExtractorRegistry;
use crate::masking::{self, MaskReport};
use std::fs;
use std::path::Path;

/// Extraction-then-masking pipeline over a fixed extractor registry.
pub struct MaskPipeline {
    registry: ExtractorRegistry,
}

impl MaskPipeline {
    /// Creates a pipeline over a custom extractor registry.
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    /// Creates a pipeline with the four built-in document formats.
    pub fn with_default_extractors() -> Self {
        Self::new(ExtractorRegistry::with_default_extractors())
    }

    /// Extracts and masks, without touching any output path.
    ///
    /// Checks the input path first, then loads the word list, so a
    /// missing input is reported before a missing configuration.
    pub fn mask_document(&self, input: &Path, config: &Path) -> MaskResult<(String, MaskReport)> {
        if !input.exists() {
            return Err(MaskError::NotFound(input.to_path_buf()));
        }

        let words = SensitiveWordList::load(config)?;
        let text = self.registry.extract(input)?;
        Ok(masking::mask_with_report(&text, &words))
    }

    /// Runs the full pipeline and writes the masked text to `output`
    /// in a single write, overwriting any existing file.
    pub fn run(&self, input: &Path, config: &Path, output: &Path) -> MaskResult<MaskReport> {
        let (masked, report) = self.mask_document(input, config)?;
        fs::write(output, masked).map_err(|source| MaskError::io(output, source))?;
        Ok(report)
    }

    /// Extracts the input document's text without masking, for
    /// verifying how a format flattens.
    pub fn extract_text(&self, input: &Path) -> MaskResult<String> {
        self.registry.extract(input)
    }
}

impl Default for MaskPipeline {
    fn default() -> Self {
        Self::with_default_extractors()
    }
}
