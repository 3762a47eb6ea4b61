//! The `gradetext detail` command: standalone Jaro-Winkler trace inspection.

use anyhow::Result;
use comfy_table::Table;

use gradetext_core::{jaro_winkler, jaro_winkler_detail};

pub fn execute(s1: &str, s2: &str, format: &str) -> Result<()> {
    let detail = jaro_winkler_detail(s1, s2);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&detail)?),
        "text" => {
            println!("jaro-winkler({s1:?}, {s2:?}) = {:.3}", jaro_winkler(s1, s2));

            if !detail.matches.is_empty() {
                let mut table = Table::new();
                table.set_header(vec!["s1 index", "s2 index", "char"]);
                for m in &detail.matches {
                    table.add_row(vec![
                        m.s1_index.to_string(),
                        m.s2_index.to_string(),
                        m.ch.to_string(),
                    ]);
                }
                println!("{table}");
            }

            if !detail.transpositions.is_empty() {
                let pairs = detail
                    .transpositions
                    .iter()
                    .map(|t| format!("({}, {})", t.s1_index, t.s2_index))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("transposed positions: {pairs}");
            }

            for line in &detail.summary {
                println!("  {line}");
            }
        }
        other => anyhow::bail!("unknown format: {other}"),
    }

    Ok(())
}
