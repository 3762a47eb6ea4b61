//! The `gradetext validate` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::bank;

pub fn execute(path: PathBuf) -> Result<()> {
    let loaded = bank::parse_bank(&path)?;
    let warnings = bank::validate_bank(&loaded);

    if warnings.is_empty() {
        println!(
            "OK: {} ({} questions)",
            loaded.name,
            loaded.questions.len()
        );
        return Ok(());
    }

    println!("{} warning(s) in {}:", warnings.len(), path.display());
    for w in &warnings {
        match &w.question_id {
            Some(id) => println!("  [{}] {}", id, w.message),
            None => println!("  {}", w.message),
        }
    }

    Ok(())
}
