//! Semantic scorer boundary.
//!
//! The engine never owns an embedding model; it consumes an injected
//! capability that compares two raw texts and returns a similarity in [0, 1]
//! or a typed error. The composer decides what a failure means (fallback to
//! Jaro-Winkler) and records that decision in the report; nothing is
//! swallowed at this boundary.

use thiserror::Error;

/// Errors a semantic scorer may surface.
///
/// Every variant is an expected, recoverable condition: the composer
/// substitutes a fallback similarity and carries on.
#[derive(Debug, Error)]
pub enum ScorerError {
    /// The scorer exists but cannot serve requests (model not loaded,
    /// backend unreachable).
    #[error("semantic scorer unavailable: {0}")]
    Unavailable(String),

    /// The scorer ran and failed.
    #[error("semantic scorer failed: {0}")]
    Failed(String),
}

/// An externally supplied meaning-based similarity capability.
///
/// Implementations must be safe for concurrent invocation (`Send + Sync`);
/// the engine itself never serializes calls.
pub trait SemanticScorer: Send + Sync {
    /// Human-readable scorer name, recorded in score reports.
    fn name(&self) -> &str;

    /// Similarity of two raw (un-normalized) texts, in [0, 1].
    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f64, ScorerError>;
}

/// Adapter turning a plain function or closure into a [`SemanticScorer`].
pub struct FnScorer<F> {
    name: String,
    f: F,
}

impl<F> FnScorer<F>
where
    F: Fn(&str, &str) -> Result<f64, ScorerError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> SemanticScorer for FnScorer<F>
where
    F: Fn(&str, &str) -> Result<f64, ScorerError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f64, ScorerError> {
        (self.f)(text_a, text_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_scorer_delegates() {
        let scorer = FnScorer::new("fixed", |_a: &str, _b: &str| Ok(0.75));
        assert_eq!(scorer.name(), "fixed");
        assert_eq!(scorer.similarity("x", "y").unwrap(), 0.75);
    }

    #[test]
    fn fn_scorer_propagates_errors() {
        let scorer = FnScorer::new("broken", |_a: &str, _b: &str| {
            Err(ScorerError::Unavailable("model not loaded".into()))
        });
        let err = scorer.similarity("x", "y").unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn scorer_is_object_safe() {
        let scorer = FnScorer::new("fixed", |_a: &str, _b: &str| Ok(1.0));
        let dyn_scorer: &dyn SemanticScorer = &scorer;
        assert_eq!(dyn_scorer.similarity("a", "b").unwrap(), 1.0);
    }
}
