//! Score composition policies.
//!
//! Two policies over the same normalized inputs:
//!
//! - **distance/lexical**: word overlap when any reference word survives in
//!   the submission, otherwise edit-distance similarity.
//! - **weighted blend**: fixed 0.25/0.25/0.5 combination of Levenshtein
//!   similarity, Jaro-Winkler, and an injected semantic score. A missing,
//!   failing, or out-of-range scorer substitutes Jaro-Winkler for the
//!   semantic term; the weights are never renormalized and the substitution
//!   is recorded in the report.
//!
//! Rounding happens only at the boundary: 2 decimals for scores, 3 for
//! component similarities. All intermediate math is full precision.

use crate::jaro::{jaro_winkler, jaro_winkler_detail};
use crate::levenshtein::align_chars;
use crate::normalize::normalize;
use crate::overlap::overlap_score;
use crate::report::{Explanation, LexicalDistanceScore, ScoreReport, SemanticSource};
use crate::scorer::SemanticScorer;

/// Weight of the Levenshtein similarity term in the blend.
pub const LEVENSHTEIN_WEIGHT: f64 = 0.25;
/// Weight of the Jaro-Winkler term in the blend.
pub const JARO_WINKLER_WEIGHT: f64 = 0.25;
/// Weight of the semantic term in the blend.
pub const SEMANTIC_WEIGHT: f64 = 0.5;

/// Round half-away-from-zero to `places` decimals.
fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// `1 − distance/max_len` over character counts; 0.0 when both texts are
/// empty (degenerate denominator, by convention).
fn levenshtein_similarity(distance: usize, len_a: usize, len_b: usize) -> f64 {
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 0.0;
    }
    1.0 - distance as f64 / max_len as f64
}

/// Score a submission under the distance/lexical policy.
///
/// Any lexical overlap wins and carries the floor-plus-bonus score; with no
/// overlap the score degrades to edit-distance similarity scaled by
/// `max_score`. The distance and trace are computed exactly once and always
/// returned for display.
pub fn score_lexical_or_distance(
    reference: &str,
    submission: &str,
    max_score: f64,
) -> LexicalDistanceScore {
    let key = normalize(reference);
    let student = normalize(submission);

    let alignment = align_chars(&key, &student);

    match overlap_score(&key, &student, max_score) {
        Some(overlap) => {
            tracing::debug!(
                matched = overlap.matched_words.len(),
                score = overlap.score,
                "lexical overlap scored"
            );
            LexicalDistanceScore {
                final_score: round_dp(overlap.score, 2),
                distance: alignment.distance,
                trace: alignment.trace,
                matched_words: overlap.matched_words,
            }
        }
        None => {
            let similarity = levenshtein_similarity(
                alignment.distance,
                key.chars().count(),
                student.chars().count(),
            );
            tracing::debug!(
                distance = alignment.distance,
                similarity,
                "no lexical signal, fell back to edit distance"
            );
            LexicalDistanceScore {
                final_score: round_dp(similarity * max_score, 2),
                distance: alignment.distance,
                trace: alignment.trace,
                matched_words: Default::default(),
            }
        }
    }
}

/// Score a submission under the weighted-blend policy.
///
/// The semantic scorer sees the original (non-cleaned) texts; every other
/// metric runs on cleaned text. Scorer absence or failure is an expected
/// condition resolved by substituting the Jaro-Winkler similarity, never by
/// redistributing weights or propagating an error.
pub fn score_weighted_blend(
    reference: &str,
    submission: &str,
    max_score: f64,
    scorer: Option<&dyn SemanticScorer>,
) -> ScoreReport {
    let key = normalize(reference);
    let student = normalize(submission);

    let alignment = align_chars(&key, &student);
    let lev_sim = levenshtein_similarity(
        alignment.distance,
        key.chars().count(),
        student.chars().count(),
    );
    let jw_sim = jaro_winkler(&key, &student);
    let detail = jaro_winkler_detail(&key, &student);
    let overlap = overlap_score(&key, &student, max_score);

    let (sem_sim, semantic_source) = match scorer {
        None => (
            jw_sim,
            SemanticSource::Fallback {
                reason: "no semantic scorer available".to_string(),
            },
        ),
        Some(s) => match s.similarity(reference, submission) {
            Ok(v) if (0.0..=1.0).contains(&v) => (
                v,
                SemanticSource::Scorer {
                    name: s.name().to_string(),
                },
            ),
            Ok(v) => {
                tracing::warn!(
                    scorer = s.name(),
                    value = v,
                    "semantic scorer returned out-of-range similarity, falling back"
                );
                (
                    jw_sim,
                    SemanticSource::Fallback {
                        reason: format!("scorer '{}' returned out-of-range value {v}", s.name()),
                    },
                )
            }
            Err(e) => {
                tracing::warn!(scorer = s.name(), error = %e, "semantic scorer failed, falling back");
                (
                    jw_sim,
                    SemanticSource::Fallback {
                        reason: format!("scorer '{}' failed: {e}", s.name()),
                    },
                )
            }
        },
    };

    let blended =
        LEVENSHTEIN_WEIGHT * lev_sim + JARO_WINKLER_WEIGHT * jw_sim + SEMANTIC_WEIGHT * sem_sim;
    let final_score = (blended * max_score).clamp(0.0, max_score);

    tracing::debug!(
        lev_sim,
        jw_sim,
        sem_sim,
        final_score,
        "weighted blend composed"
    );

    let (lexical_score, matched_words) = match overlap {
        Some(o) => (Some(round_dp(o.score, 2)), o.matched_words),
        None => (None, Default::default()),
    };

    ScoreReport {
        final_score: round_dp(final_score, 2),
        levenshtein_similarity: round_dp(lev_sim, 3),
        jaro_winkler_similarity: round_dp(jw_sim, 3),
        semantic_similarity: round_dp(sem_sim, 3),
        semantic_source,
        explanation: Explanation {
            reference_clean: key,
            submission_clean: student,
            lexical_score,
            edit_distance: alignment.distance,
            trace: alignment.trace,
            char_matches: detail.matches,
            transpositions: detail.transpositions,
            prefix_len: detail.prefix_len,
            matched_words,
            summary: detail.summary,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::{FnScorer, ScorerError};

    #[test]
    fn identical_after_normalization_scores_full_marks() {
        let r = score_lexical_or_distance("Matahari adalah bintang", "matahari adalah bintang!", 1.0);
        assert!((r.final_score - 1.0).abs() < 1e-9);
        assert_eq!(r.distance, 0);
        assert!(r.trace.is_empty());
        assert_eq!(r.matched_words.len(), 3);
    }

    #[test]
    fn disjoint_words_fall_back_to_edit_distance() {
        // kucing -> anjing is three substitutions over max length six.
        let r = score_lexical_or_distance("kucing", "anjing", 1.0);
        assert!(r.matched_words.is_empty());
        assert_eq!(r.distance, 3);
        assert!((r.final_score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn both_empty_scores_zero() {
        let r = score_lexical_or_distance("", "", 1.0);
        assert_eq!(r.final_score, 0.0);
        assert_eq!(r.distance, 0);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let r = score_lexical_or_distance("matahari", "", 1.0);
        assert_eq!(r.final_score, 0.0);
        assert_eq!(r.distance, 8);
    }

    #[test]
    fn overlap_floor_holds_under_this_policy() {
        let r = score_lexical_or_distance("a b c d e f g h i j", "j", 1.0);
        assert!(r.final_score >= 0.3);
    }

    #[test]
    fn max_score_scales_the_distance_branch() {
        let r = score_lexical_or_distance("kucing", "anjing", 2.0);
        assert!((r.final_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn blend_uses_scorer_when_it_answers() {
        let scorer = FnScorer::new("fixed", |_: &str, _: &str| Ok(0.9));
        let r = score_weighted_blend("kucing", "anjing", 1.0, Some(&scorer));
        assert_eq!(
            r.semantic_source,
            SemanticSource::Scorer {
                name: "fixed".into()
            }
        );
        assert!((r.semantic_similarity - 0.9).abs() < 1e-9);
    }

    #[test]
    fn blend_of_identical_texts_with_perfect_scorer_is_max() {
        let scorer = FnScorer::new("fixed", |_: &str, _: &str| Ok(1.0));
        let r = score_weighted_blend("bintang", "bintang", 1.0, Some(&scorer));
        assert!((r.final_score - 1.0).abs() < 1e-9);
        assert!((r.levenshtein_similarity - 1.0).abs() < 1e-9);
        assert!((r.jaro_winkler_similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn blend_falls_back_when_scorer_fails_and_records_it() {
        let scorer = FnScorer::new("broken", |_: &str, _: &str| {
            Err(ScorerError::Failed("backend down".into()))
        });
        let r = score_weighted_blend("martha", "marhta", 1.0, Some(&scorer));
        assert!(r.semantic_source.is_fallback());
        // Substituted term equals the Jaro-Winkler component.
        assert!((r.semantic_similarity - r.jaro_winkler_similarity).abs() < 1e-9);
        match &r.semantic_source {
            SemanticSource::Fallback { reason } => {
                assert!(reason.contains("broken"));
                assert!(reason.contains("backend down"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn blend_falls_back_when_no_scorer_is_injected() {
        let r = score_weighted_blend("martha", "marhta", 1.0, None);
        assert!(r.semantic_source.is_fallback());
        assert!((r.semantic_similarity - r.jaro_winkler_similarity).abs() < 1e-9);
    }

    #[test]
    fn blend_rejects_out_of_range_scorer_values() {
        let scorer = FnScorer::new("wild", |_: &str, _: &str| Ok(1.7));
        let r = score_weighted_blend("martha", "marhta", 1.0, Some(&scorer));
        assert!(r.semantic_source.is_fallback());
        assert!((r.semantic_similarity - r.jaro_winkler_similarity).abs() < 1e-9);
    }

    #[test]
    fn blend_is_monotone_in_the_semantic_term() {
        let low = FnScorer::new("low", |_: &str, _: &str| Ok(0.2));
        let high = FnScorer::new("high", |_: &str, _: &str| Ok(0.9));
        let r_low = score_weighted_blend("kucing", "anjing", 1.0, Some(&low));
        let r_high = score_weighted_blend("kucing", "anjing", 1.0, Some(&high));
        assert!(r_high.final_score > r_low.final_score);
    }

    #[test]
    fn blend_weights_are_fixed() {
        // lev = 0.5, jw known, sem = 0.0: the blend must be exactly
        // 0.25*lev + 0.25*jw with no renormalization of the dead weight.
        let scorer = FnScorer::new("zero", |_: &str, _: &str| Ok(0.0));
        let r = score_weighted_blend("kucing", "anjing", 1.0, Some(&scorer));
        let jw = jaro_winkler("kucing", "anjing");
        let expected = 0.25 * 0.5 + 0.25 * jw;
        assert!((r.final_score - round_dp(expected, 2)).abs() < 1e-9);
    }

    #[test]
    fn semantic_scorer_receives_original_text() {
        let scorer = FnScorer::new("spy", |a: &str, b: &str| {
            assert_eq!(a, "Matahari adalah bintang!");
            assert_eq!(b, "MATAHARI");
            Ok(0.5)
        });
        let r = score_weighted_blend("Matahari adalah bintang!", "MATAHARI", 1.0, Some(&scorer));
        assert!(!r.semantic_source.is_fallback());
    }

    #[test]
    fn explanation_mirrors_the_computation() {
        let r = score_weighted_blend("Martha!", "marhta", 1.0, None);
        assert_eq!(r.explanation.reference_clean, "martha");
        assert_eq!(r.explanation.submission_clean, "marhta");
        assert_eq!(r.explanation.char_matches.len(), 6);
        assert_eq!(r.explanation.prefix_len, 3);
        assert_eq!(r.explanation.edit_distance, r.explanation.trace.len());
        assert!(!r.explanation.summary.is_empty());
    }

    #[test]
    fn both_empty_blend_is_degenerate_but_bounded() {
        let r = score_weighted_blend("", "", 1.0, None);
        // lev term is 0 by convention, jaro terms are 1 for two empties.
        assert_eq!(r.levenshtein_similarity, 0.0);
        assert!((r.jaro_winkler_similarity - 1.0).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&r.final_score));
    }

    #[test]
    fn rounding_happens_only_at_the_boundary() {
        let r = score_weighted_blend("kucing", "anjing", 1.0, None);
        // Components carry 3 decimals, the score 2.
        let jw = jaro_winkler("kucing", "anjing");
        assert!((r.jaro_winkler_similarity - round_dp(jw, 3)).abs() < 1e-12);
        let unrounded = 0.25 * 0.5 + 0.25 * jw + 0.5 * jw;
        assert!((r.final_score - round_dp(unrounded, 2)).abs() < 1e-12);
    }

    #[test]
    fn report_serializes_for_display() {
        let r = score_weighted_blend("martha", "marhta", 1.0, None);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("final_score"));
        assert!(json.contains("\"kind\":\"fallback\""));
    }
}
