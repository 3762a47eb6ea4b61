//! The `gradetext score` command: one-shot scoring of a submission.

use anyhow::Result;
use comfy_table::Table;

use gradetext_core::{score_lexical_or_distance, score_weighted_blend};

pub fn execute(
    reference: &str,
    submission: &str,
    max_score: f64,
    policy: &str,
    format: &str,
) -> Result<()> {
    anyhow::ensure!(max_score > 0.0, "max-score must be positive");

    match policy {
        "lexical" => {
            let result = score_lexical_or_distance(reference, submission, max_score);
            match format {
                "json" => println!("{}", serde_json::to_string_pretty(&result)?),
                "text" => {
                    let ops = result
                        .trace
                        .iter()
                        .map(|op| op.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    let words = result
                        .matched_words
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ");

                    let mut table = Table::new();
                    table.set_header(vec!["Metric", "Value"]);
                    table.add_row(vec!["Score".to_string(), format!("{:.2}", result.final_score)]);
                    table.add_row(vec!["Edit distance".to_string(), result.distance.to_string()]);
                    table.add_row(vec!["Operations".to_string(), ops]);
                    table.add_row(vec!["Matched words".to_string(), words]);
                    println!("{table}");
                }
                other => anyhow::bail!("unknown format: {other}"),
            }
        }
        "blend" => {
            // No scorer is injected from the CLI; the report records the
            // Jaro-Winkler substitution for the semantic term.
            let report = score_weighted_blend(reference, submission, max_score, None);
            match format {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                "text" => {
                    let mut table = Table::new();
                    table.set_header(vec!["Metric", "Value"]);
                    table.add_row(vec![
                        "Final score".to_string(),
                        format!("{:.2}", report.final_score),
                    ]);
                    table.add_row(vec![
                        "Levenshtein similarity".to_string(),
                        format!("{:.3}", report.levenshtein_similarity),
                    ]);
                    table.add_row(vec![
                        "Jaro-Winkler similarity".to_string(),
                        format!("{:.3}", report.jaro_winkler_similarity),
                    ]);
                    table.add_row(vec![
                        "Semantic similarity".to_string(),
                        format!("{:.3}", report.semantic_similarity),
                    ]);
                    println!("{table}");

                    for line in &report.explanation.summary {
                        println!("  {line}");
                    }
                    if let gradetext_core::SemanticSource::Fallback { reason } =
                        &report.semantic_source
                    {
                        println!("  semantic term substituted: {reason}");
                    }
                }
                other => anyhow::bail!("unknown format: {other}"),
            }
        }
        other => anyhow::bail!("unknown policy: {other} (expected lexical or blend)"),
    }

    Ok(())
}
