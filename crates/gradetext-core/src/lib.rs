//! gradetext-core — Text similarity scoring engine.
//!
//! Scores free-text submissions against a reference answer by combining
//! edit-distance alignment, Jaro-Winkler matching, and lexical word overlap
//! (optionally blended with an injected semantic scorer) into a bounded,
//! reproducible score plus a structured explanation.

pub mod compose;
pub mod jaro;
pub mod levenshtein;
pub mod normalize;
pub mod overlap;
pub mod report;
pub mod scorer;

pub use compose::{score_lexical_or_distance, score_weighted_blend};
pub use jaro::{jaro, jaro_winkler, jaro_winkler_detail, CharMatch, MatchDetail, TranspositionPair};
pub use levenshtein::{align, align_chars, Alignment, EditOp};
pub use normalize::normalize;
pub use overlap::{overlap_score, WordOverlap};
pub use report::{Explanation, LexicalDistanceScore, ScoreReport, SemanticSource};
pub use scorer::{FnScorer, ScorerError, SemanticScorer};
