//! Mask rules and their application.
//!
//! A rule pairs a matcher (literal word or built-in pattern) with the
//! replacement policy: every matched span becomes a run of [`MASK_CHAR`]
//! of the same character length. Rules are pure `(text) -> text`
//! transformations, applied in a fixed order by [`super::mask`].

use super::patterns;
use crate::config::SensitiveWordList;
use regex::{Captures, Regex};

/// The character substituted for every masked character.
pub const MASK_CHAR: char = '*';

/// A single masking rule.
#[derive(Debug, Clone)]
pub enum MaskRule {
    /// Exact substring match, case-sensitive, no word-boundary
    /// requirement. Regex metacharacters in the word have no special
    /// meaning.
    Literal(String),

    /// One of the built-in regular-expression patterns.
    Pattern(&'static Regex),
}

impl MaskRule {
    /// Applies the rule, replacing every match with a mask run of the
    /// matched span's character length.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Literal(word) => apply_literal(text, word),
            Self::Pattern(pattern) => pattern
                .replace_all(text, |caps: &Captures| mask_for(&caps[0]))
                .into_owned(),
        }
    }

    /// Counts how many spans the rule would replace in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        match self {
            Self::Literal(word) if word.is_empty() => 0,
            Self::Literal(word) => text.matches(word.as_str()).count(),
            Self::Pattern(pattern) => pattern.find_iter(text).count(),
        }
    }
}

/// Builds the full ordered rule list for one masking invocation:
/// configured words in file order, then IP, email, and phone patterns.
pub fn build_rules(words: &SensitiveWordList) -> Vec<MaskRule> {
    let mut rules: Vec<MaskRule> = words
        .iter()
        .map(|word| MaskRule::Literal(word.to_string()))
        .collect();

    rules.push(MaskRule::Pattern(patterns::ip_address()));
    rules.push(MaskRule::Pattern(patterns::email_address()));
    rules.push(MaskRule::Pattern(patterns::phone_number()));
    rules
}

/// Mask run matching the character length of `matched`.
fn mask_for(matched: &str) -> String {
    MASK_CHAR.to_string().repeat(matched.chars().count())
}

fn apply_literal(text: &str, word: &str) -> String {
    // An empty configured line would otherwise replace the empty match
    // at every position.
    if word.is_empty() {
        return text.to_string();
    }
    text.replace(word, &mask_for(word))
}
