//! The masking pass.
//!
//! Masking folds an ordered list of rules over the extracted text:
//! configured literal words first, in file order, then the built-in IP,
//! email, and phone patterns. Each rule rewrites the text the next rule
//! sees, so a mask produced by an earlier literal word is no longer
//! visible to later literal words but can still be crossed by a pattern
//! match. Every substitution preserves the character length of the
//! matched span.

pub mod patterns;
pub mod rules;

pub use rules::{build_rules, MaskRule, MASK_CHAR};

use crate::config::SensitiveWordList;

/// Statistics for one masking invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskReport {
    /// Words loaded from the configuration, counting duplicates and
    /// empty lines.
    pub words_loaded: usize,

    /// Spans replaced by literal word rules.
    pub literal_matches: usize,

    /// Spans replaced by the IP, email, and phone patterns.
    pub pattern_matches: usize,
}

impl MaskReport {
    /// Total spans replaced across all rules.
    pub fn total_matches(&self) -> usize {
        self.literal_matches + self.pattern_matches
    }

    /// Returns true if any rule replaced at least one span.
    pub fn has_matches(&self) -> bool {
        self.total_matches() > 0
    }
}

/// Masks `text` with the configured words plus the built-in patterns.
///
/// The three pattern passes always run, even with an empty word list.
pub fn mask(text: &str, words: &SensitiveWordList) -> String {
    mask_with_report(text, words).0
}

/// Like [`mask`], also returning per-category match counts.
pub fn mask_with_report(text: &str, words: &SensitiveWordList) -> (String, MaskReport) {
    let mut report = MaskReport {
        words_loaded: words.len(),
        ..MaskReport::default()
    };

    let masked = build_rules(words)
        .iter()
        .fold(text.to_string(), |text, rule| {
            let hits = rule.count_matches(&text);
            match rule {
                MaskRule::Literal(_) => report.literal_matches += hits,
                MaskRule::Pattern(_) => report.pattern_matches += hits,
            }
            rule.apply(&text)
        });

    (masked, report)
}
