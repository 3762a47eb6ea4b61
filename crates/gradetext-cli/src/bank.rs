//! TOML question-bank loading, validation, and sampling.
//!
//! A bank file carries a `[bank]` header and `[[questions]]` entries, each
//! with a prompt and a reference answer. Validation reports problems as
//! warnings so a partially broken bank can still be inspected.

use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::IndexedRandom;
use serde::Deserialize;

/// A question with its reference answer.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    /// Unique identifier within the bank.
    pub id: String,
    /// The question text shown to the student.
    pub prompt: String,
    /// The reference answer submissions are scored against.
    pub answer: String,
}

/// A loaded question bank.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
}

/// Parse a bank file from disk.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;
    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(QuestionBank {
        id: parsed.bank.id,
        name: parsed.bank.name,
        questions: parsed.questions,
    })
}

/// A warning from question-bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = std::collections::HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in &bank.questions {
        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "prompt is empty".into(),
            });
        }
        if q.answer.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "reference answer is empty".into(),
            });
        }
    }

    if bank.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "bank contains no questions".into(),
        });
    }

    warnings
}

/// Sample up to `count` distinct questions from the bank.
pub fn sample_questions(bank: &QuestionBank, count: usize) -> Vec<Question> {
    let mut rng = rand::rng();
    bank.questions
        .choose_multiple(&mut rng, count.min(bank.questions.len()))
        .cloned()
        .collect()
}
