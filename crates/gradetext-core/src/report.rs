//! Fixed-field result records produced by the score composer.
//!
//! Everything here is a pure function of the compared texts: no ids, no
//! timestamps, no hidden state. Records serialize directly for display.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::jaro::{CharMatch, TranspositionPair};
use crate::levenshtein::EditOp;

/// Where the semantic term of the weighted blend came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemanticSource {
    /// The injected scorer answered.
    Scorer { name: String },
    /// Jaro-Winkler similarity was substituted for the semantic term.
    Fallback { reason: String },
}

impl SemanticSource {
    /// True when the semantic term was substituted rather than scored.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SemanticSource::Fallback { .. })
    }
}

/// Output of the distance/lexical scoring policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalDistanceScore {
    /// Final score in [0, max_score], rounded to 2 decimals.
    pub final_score: f64,
    /// Character-level edit distance on cleaned text.
    pub distance: usize,
    /// Alignment trace realizing that distance.
    pub trace: Vec<EditOp>,
    /// Reference words also present in the submission.
    pub matched_words: BTreeSet<String>,
}

/// Structured explanation backing a score, intended for direct display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Cleaned reference text all metrics compared against.
    pub reference_clean: String,
    /// Cleaned submission text.
    pub submission_clean: String,
    /// Lexical overlap score, when any words intersected.
    pub lexical_score: Option<f64>,
    /// Character-level edit distance on cleaned text.
    pub edit_distance: usize,
    /// Alignment trace realizing that distance.
    pub trace: Vec<EditOp>,
    /// Jaro matched characters.
    pub char_matches: Vec<CharMatch>,
    /// Raw Jaro transposition index pairs.
    pub transpositions: Vec<TranspositionPair>,
    /// Shared leading substring length, capped at 4.
    pub prefix_len: usize,
    /// Reference words also present in the submission.
    pub matched_words: BTreeSet<String>,
    /// Human-readable Jaro-Winkler operation summary.
    pub summary: Vec<String>,
}

/// Output of the weighted-blend scoring policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Final blended score in [0, max_score], rounded to 2 decimals.
    pub final_score: f64,
    /// `1 − distance/max_len` on cleaned text, rounded to 3 decimals.
    pub levenshtein_similarity: f64,
    /// Jaro-Winkler on cleaned text, rounded to 3 decimals.
    pub jaro_winkler_similarity: f64,
    /// The semantic term actually used in the blend, rounded to 3 decimals.
    pub semantic_similarity: f64,
    /// Whether the semantic term was scored or substituted.
    pub semantic_source: SemanticSource,
    /// Full explanation record.
    pub explanation: Explanation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_source_fallback_flag() {
        let scored = SemanticSource::Scorer {
            name: "embedder".into(),
        };
        let substituted = SemanticSource::Fallback {
            reason: "no semantic scorer available".into(),
        };
        assert!(!scored.is_fallback());
        assert!(substituted.is_fallback());
    }

    #[test]
    fn semantic_source_serde_tagging() {
        let json = serde_json::to_string(&SemanticSource::Fallback {
            reason: "model offline".into(),
        })
        .unwrap();
        assert!(json.contains("\"kind\":\"fallback\""));
        let back: SemanticSource = serde_json::from_str(&json).unwrap();
        assert!(back.is_fallback());
    }
}
