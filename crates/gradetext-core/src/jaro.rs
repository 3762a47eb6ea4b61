//! Jaro and Jaro-Winkler similarity with match and transposition tracing.
//!
//! The character matcher is the greedy, leftmost, single-pass variant of the
//! reference algorithm: each s1 character takes the first unmatched equal
//! character inside the bounded window. That greediness is not a global
//! optimum and is preserved deliberately so scores stay compatible with the
//! reference values.

use serde::{Deserialize, Serialize};

/// Default Winkler prefix scaling factor.
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Maximum number of leading characters the Winkler bonus considers.
pub const MAX_PREFIX_LEN: usize = 4;

/// A character counted as matching under the bounded-window rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharMatch {
    /// Index into s1.
    pub s1_index: usize,
    /// Index into s2.
    pub s2_index: usize,
    /// The matched character.
    pub ch: char,
}

/// A pair of matched positions whose characters differ in relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspositionPair {
    pub s1_index: usize,
    pub s2_index: usize,
}

/// Full trace of one Jaro-Winkler comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    /// Every matched character, in s1 order.
    pub matches: Vec<CharMatch>,
    /// Raw transposition index pairs (the score halves this count).
    pub transpositions: Vec<TranspositionPair>,
    /// Length of the shared leading substring, capped at 4.
    pub prefix_len: usize,
    /// Human-readable operation summary.
    pub summary: Vec<String>,
}

/// `max(0, floor(max(len) / 2) - 1)`.
fn match_window(len1: usize, len2: usize) -> usize {
    (len1.max(len2) / 2).saturating_sub(1)
}

/// Greedy bounded-window matching. Returns the matches in s1 order plus the
/// used-position flags for both strings.
fn greedy_matches(a: &[char], b: &[char], window: usize) -> (Vec<CharMatch>, Vec<bool>, Vec<bool>) {
    let mut a_used = vec![false; a.len()];
    let mut b_used = vec![false; b.len()];
    let mut matches = Vec::new();

    for (i, &ch) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for (j, used) in b_used.iter_mut().enumerate().take(end).skip(start) {
            if !*used && b[j] == ch {
                a_used[i] = true;
                *used = true;
                matches.push(CharMatch {
                    s1_index: i,
                    s2_index: j,
                    ch,
                });
                break;
            }
        }
    }

    (matches, a_used, b_used)
}

/// Walk matched s1 positions in order against matched s2 positions in order,
/// recording every pair whose characters differ.
fn transposition_pairs(
    a: &[char],
    b: &[char],
    a_used: &[bool],
    b_used: &[bool],
) -> Vec<TranspositionPair> {
    let mut pairs = Vec::new();
    let mut j = 0;
    for (i, &used) in a_used.iter().enumerate() {
        if !used {
            continue;
        }
        while j < b.len() && !b_used[j] {
            j += 1;
        }
        if j < b.len() {
            if a[i] != b[j] {
                pairs.push(TranspositionPair {
                    s1_index: i,
                    s2_index: j,
                });
            }
            j += 1;
        }
    }
    pairs
}

/// Shared leading substring length, capped at [`MAX_PREFIX_LEN`]. Computed
/// independently of the match/transposition step.
fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter()
        .zip(b.iter())
        .take(MAX_PREFIX_LEN)
        .take_while(|(x, y)| x == y)
        .count()
}

/// Jaro similarity in [0, 1].
///
/// Both strings empty is 1.0 by convention; exactly one empty is 0.0.
pub fn jaro(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = match_window(a.len(), b.len());
    let (matches, a_used, b_used) = greedy_matches(&a, &b, window);
    let m = matches.len();
    if m == 0 {
        return 0.0;
    }

    let t = transposition_pairs(&a, &b, &a_used, &b_used).len() / 2;

    let m = m as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t as f64) / m) / 3.0
}

/// Jaro-Winkler similarity with the default prefix weight of 0.1.
pub fn jaro_winkler(s1: &str, s2: &str) -> f64 {
    jaro_winkler_with_weight(s1, s2, DEFAULT_PREFIX_WEIGHT)
}

/// Jaro-Winkler similarity: Jaro boosted by the shared-prefix bonus
/// `prefix_len × weight × (1 − jaro)` with the prefix capped at 4 characters.
pub fn jaro_winkler_with_weight(s1: &str, s2: &str, prefix_weight: f64) -> f64 {
    let jaro_sim = jaro(s1, s2);
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let prefix_len = common_prefix_len(&a, &b);
    jaro_sim + (prefix_len as f64 * prefix_weight * (1.0 - jaro_sim))
}

/// Trace a comparison: matched characters, raw transposition pairs, prefix
/// length, and a short operation summary.
///
/// An empty input yields the explicit "empty string" marker instead of a
/// degenerate trace.
pub fn jaro_winkler_detail(s1: &str, s2: &str) -> MatchDetail {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() || b.is_empty() {
        return MatchDetail {
            matches: Vec::new(),
            transpositions: Vec::new(),
            prefix_len: 0,
            summary: vec!["empty string".to_string()],
        };
    }

    let window = match_window(a.len(), b.len());
    let (matches, a_used, b_used) = greedy_matches(&a, &b, window);
    let transpositions = transposition_pairs(&a, &b, &a_used, &b_used);
    let prefix_len = common_prefix_len(&a, &b);

    let mut summary = Vec::new();
    if !matches.is_empty() {
        summary.push(format!("found {} matching characters", matches.len()));
    }
    if !transpositions.is_empty() {
        summary.push(format!("{} transpositions", transpositions.len()));
    }
    if prefix_len > 0 {
        summary.push(format!("shared prefix length {prefix_len}"));
    }

    MatchDetail {
        matches,
        transpositions,
        prefix_len,
        summary,
    }
}
