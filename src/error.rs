//! Error types for the masking pipeline.
//!
//! Every failure mode of the pipeline maps to one [`MaskError`] variant,
//! so the binary can render a single user-facing message per failed
//! invocation.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for masking operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Error type covering extraction, configuration, and output failures.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A required path argument was not supplied.
    #[error("missing required {0} path")]
    MissingInput(&'static str),

    /// The input or configuration file does not exist on disk.
    #[error("file '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// The input file's extension is not among the supported formats.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The underlying parser could not decode a document of the claimed
    /// format (corrupt archive, broken xref, unreadable workbook).
    #[error("failed to extract text from '{}': {reason}", path.display())]
    Extraction { path: PathBuf, reason: String },

    /// Reading the configuration or input file, or writing the output
    /// file, failed at the IO level.
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MaskError {
    /// Wraps an IO error with the path it occurred on.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps any parser error as an extraction failure on `path`.
    pub fn extraction(path: &Path, reason: impl ToString) -> Self {
        Self::Extraction {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
