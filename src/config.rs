//! Sensitive word list configuration.
//!
//! The configuration file is plain UTF-8 text with one literal word per
//! line; no comments, escaping, or special syntax. Lines are kept
//! exactly as written: duplicates and empty lines are preserved and no
//! trimming is applied, so the mask rules see the words in file order.

use crate::error::{MaskError, MaskResult};
use std::fs;
use std::path::Path;

/// Ordered list of literal words to mask, as loaded from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensitiveWordList {
    words: Vec<String>,
}

impl SensitiveWordList {
    /// Loads the word list from a configuration file.
    ///
    /// Fails with [`MaskError::NotFound`] if the path does not exist and
    /// [`MaskError::Io`] if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> MaskResult<Self> {
        if !path.exists() {
            return Err(MaskError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| MaskError::io(path, source))?;
        Ok(Self::from_contents(&contents))
    }

    /// Builds a word list from raw configuration text, one word per line.
    pub fn from_contents(contents: &str) -> Self {
        Self {
            words: contents.lines().map(str::to_string).collect(),
        }
    }

    /// Builds a word list from an explicit sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Iterates the words in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of configured words, counting duplicates and empty lines.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
