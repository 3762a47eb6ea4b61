//! Text normalization applied before every comparison.

/// Produce the clean form of an answer: ASCII punctuation removed, folded to
/// lowercase, whitespace runs collapsed to single spaces, ends trimmed.
///
/// Total and idempotent; the input is never mutated.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
