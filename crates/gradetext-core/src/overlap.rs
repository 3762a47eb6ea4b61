//! Lexical word-overlap heuristic.
//!
//! Word sets come from whitespace-splitting already-normalized text. Any
//! non-empty intersection earns a floor score plus a bonus proportional to
//! the fraction of reference words the submission covered.

use std::collections::BTreeSet;

/// Floor score for any non-empty word intersection.
pub const DEFAULT_BASE: f64 = 0.3;

/// Weight of the proportional word-coverage bonus.
pub const DEFAULT_FULL_WEIGHT: f64 = 0.7;

/// A non-empty lexical overlap and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct WordOverlap {
    /// `min(base + coverage × full_weight, max_score)`.
    pub score: f64,
    /// The intersected words, sorted for reproducible explanations.
    pub matched_words: BTreeSet<String>,
}

/// Score the word overlap with the default floor and weight.
///
/// `None` means there is no lexical signal (empty intersection, including an
/// empty reference) and the caller must fall back to distance-derived
/// similarity. That branch is deliberately visible here rather than resolved
/// silently.
pub fn overlap_score(key_clean: &str, student_clean: &str, max_score: f64) -> Option<WordOverlap> {
    overlap_score_with(
        key_clean,
        student_clean,
        DEFAULT_BASE,
        DEFAULT_FULL_WEIGHT,
        max_score,
    )
}

/// Score the word overlap under an explicit floor-plus-bonus policy.
pub fn overlap_score_with(
    key_clean: &str,
    student_clean: &str,
    base: f64,
    full_weight: f64,
    max_score: f64,
) -> Option<WordOverlap> {
    let key_words: BTreeSet<&str> = key_clean.split_whitespace().collect();
    let student_words: BTreeSet<&str> = student_clean.split_whitespace().collect();

    let matched: BTreeSet<String> = key_words
        .intersection(&student_words)
        .map(|w| w.to_string())
        .collect();

    if matched.is_empty() {
        return None;
    }

    let coverage = matched.len() as f64 / key_words.len() as f64;
    let score = (base + coverage * full_weight).min(max_score);

    Some(WordOverlap {
        score,
        matched_words: matched,
    })
}
