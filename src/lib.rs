//! Document masking library: extract text, mask sensitive content.
//!
//! This library flattens documents of several formats (PDF, DOCX,
//! spreadsheets, plain text) into a single text string, then masks
//! configured sensitive words plus IP-, email-, and phone-shaped
//! substrings, replacing each matched span with an equal-length run of
//! `*`. The masked text is plain text; no document layout survives.
//!
//! # Architecture
//!
//! - [`extract`]: per-format text extraction behind an extension-keyed
//!   registry
//! - [`masking`]: ordered mask rules (literal words, then built-in
//!   patterns) folded over the text
//! - [`config`]: sensitive word list loading
//! - [`pipeline`]: the extract-then-mask orchestration
//! - [`error`]: typed errors for every failure mode
//!
//! # Quick Start
//!
//! ```no_run
//! use docmask::MaskPipeline;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = MaskPipeline::with_default_extractors();
//!
//! let report = pipeline.run(
//!     Path::new("report.docx"),
//!     Path::new("words.txt"),
//!     Path::new("report-masked.txt"),
//! )?;
//! println!("masked {} span(s)", report.total_matches());
//! # Ok(())
//! # }
//! ```
//!
//! # Masking without files
//!
//! ```
//! use docmask::{mask, SensitiveWordList};
//!
//! let words = SensitiveWordList::from_words(["secret"]);
//! let masked = mask("the secret code is secret123", &words);
//! assert_eq!(masked, "the ****** code is ******123");
//! ```

// Public API
pub mod config;
pub mod error;
pub mod extract;
pub mod masking;
pub mod pipeline;

// Re-exports for convenient access
pub use config::SensitiveWordList;
pub use error::{MaskError, MaskResult};
pub use extract::{DocumentExtractor, ExtractorRegistry};
pub use masking::{mask, mask_with_report, MaskReport, MaskRule, MASK_CHAR};
pub use pipeline::MaskPipeline;
