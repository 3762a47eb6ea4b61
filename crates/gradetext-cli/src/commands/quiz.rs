//! The `gradetext quiz` command: interactive grading session.
//!
//! Samples questions from a bank, reads answers from stdin, grades each with
//! the distance/lexical policy (and shows the Jaro-Winkler score alongside),
//! then renders a results grid and the session total.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use serde::Serialize;

use gradetext_core::{jaro_winkler, normalize, score_lexical_or_distance, LexicalDistanceScore};

use crate::bank;

/// One graded answer in a session.
#[derive(Debug, Serialize)]
struct GradedQuestion {
    question_id: String,
    prompt: String,
    reference: String,
    submission: String,
    score: LexicalDistanceScore,
    jaro_winkler_score: f64,
}

/// A full quiz session, serializable for the optional JSON output.
#[derive(Debug, Serialize)]
struct QuizSession {
    bank_id: String,
    bank_name: String,
    max_score_per_question: f64,
    results: Vec<GradedQuestion>,
    total_score: f64,
    total_possible: f64,
}

pub fn execute(
    bank_path: PathBuf,
    questions: usize,
    max_score: f64,
    output: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(questions >= 1, "questions must be at least 1");
    anyhow::ensure!(max_score > 0.0, "max-score must be positive");

    let loaded = bank::parse_bank(&bank_path)?;
    for w in bank::validate_bank(&loaded) {
        tracing::warn!(question = ?w.question_id, "{}", w.message);
    }
    anyhow::ensure!(
        !loaded.questions.is_empty(),
        "question bank {} is empty",
        bank_path.display()
    );

    let picked = bank::sample_questions(&loaded, questions);

    println!("Quiz: {} ({} questions)\n", loaded.name, picked.len());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut results = Vec::with_capacity(picked.len());

    for (i, q) in picked.iter().enumerate() {
        println!("{}. {}", i + 1, q.prompt);
        print!("Your answer: ");
        std::io::stdout().flush()?;

        // EOF counts as an empty answer so piped sessions terminate cleanly.
        let submission = match lines.next() {
            Some(line) => line.context("failed to read answer")?,
            None => String::new(),
        };

        let score = score_lexical_or_distance(&q.answer, &submission, max_score);
        let jw = jaro_winkler(&normalize(&q.answer), &normalize(&submission)) * max_score;

        results.push(GradedQuestion {
            question_id: q.id.clone(),
            prompt: q.prompt.clone(),
            reference: q.answer.clone(),
            submission,
            score,
            jaro_winkler_score: (jw * 100.0).round() / 100.0,
        });
    }

    let total: f64 = results.iter().map(|r| r.score.final_score).sum();
    let possible = max_score * picked.len() as f64;

    let mut table = Table::new();
    table.set_header(vec![
        "Question",
        "Reference",
        "Answer",
        "Distance",
        "Operations",
        "Score",
        "JW score",
    ]);
    for r in &results {
        let ops = r
            .score
            .trace
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            r.prompt.clone(),
            r.reference.clone(),
            r.submission.clone(),
            r.score.distance.to_string(),
            ops,
            format!("{:.2}", r.score.final_score),
            format!("{:.2}", r.jaro_winkler_score),
        ]);
    }

    println!("\nResults:\n{table}");
    println!("\nTotal score: {total:.2} / {possible:.1}");

    if let Some(path) = output {
        let session = QuizSession {
            bank_id: loaded.id,
            bank_name: loaded.name,
            max_score_per_question: max_score,
            results,
            total_score: (total * 100.0).round() / 100.0,
            total_possible: possible,
        };
        let json = serde_json::to_string_pretty(&session)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write session to {}", path.display()))?;
        println!("Session saved to {}", path.display());
    }

    Ok(())
}
