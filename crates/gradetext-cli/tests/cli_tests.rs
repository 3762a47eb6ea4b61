//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

const BANK_TOML: &str = r#"
[bank]
id = "astro"
name = "Astronomy"

[[questions]]
id = "sun"
prompt = "Apa itu matahari?"
answer = "Matahari adalah bintang"
"#;

fn gradetext() -> Command {
    Command::cargo_bin("gradetext").unwrap()
}

#[test]
fn score_lexical_json_full_marks() {
    gradetext()
        .args([
            "score",
            "--reference",
            "Matahari adalah bintang",
            "--submission",
            "matahari adalah bintang!",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"final_score\": 1.0"))
        .stdout(predicate::str::contains("\"distance\": 0"));
}

#[test]
fn score_lexical_text_shows_distance_fallback() {
    gradetext()
        .args([
            "score",
            "--reference",
            "kucing",
            "--submission",
            "anjing",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.50"))
        .stdout(predicate::str::contains("substitution"));
}

#[test]
fn score_blend_records_semantic_fallback() {
    gradetext()
        .args([
            "score",
            "--reference",
            "martha",
            "--submission",
            "marhta",
            "--policy",
            "blend",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("semantic term substituted"))
        .stdout(predicate::str::contains("Jaro-Winkler similarity"));
}

#[test]
fn score_rejects_unknown_policy() {
    gradetext()
        .args([
            "score",
            "--reference",
            "a",
            "--submission",
            "b",
            "--policy",
            "vibes",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown policy"));
}

#[test]
fn detail_reports_match_trace() {
    gradetext()
        .args(["detail", "martha", "marhta", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"prefix_len\": 3"));
}

#[test]
fn validate_accepts_well_formed_bank() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.toml");
    std::fs::write(&path, BANK_TOML).unwrap();

    gradetext()
        .args(["validate", "--bank"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn validate_fails_on_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.toml");
    std::fs::write(&path, "not [valid toml }{").unwrap();

    gradetext()
        .args(["validate", "--bank"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn quiz_grades_piped_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank.toml");
    std::fs::write(&path, BANK_TOML).unwrap();

    gradetext()
        .args(["quiz", "--bank"])
        .arg(&path)
        .args(["--questions", "1"])
        .write_stdin("matahari adalah bintang\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total score: 1.00 / 1.0"));
}

#[test]
fn quiz_saves_session_json() {
    let dir = tempfile::tempdir().unwrap();
    let bank_path = dir.path().join("bank.toml");
    let session_path = dir.path().join("session.json");
    std::fs::write(&bank_path, BANK_TOML).unwrap();

    gradetext()
        .args(["quiz", "--bank"])
        .arg(&bank_path)
        .args(["--questions", "1", "--output"])
        .arg(&session_path)
        .write_stdin("matahari\n")
        .assert()
        .success();

    let saved = std::fs::read_to_string(&session_path).unwrap();
    assert!(saved.contains("\"bank_id\": \"astro\""));
    assert!(saved.contains("\"total_possible\": 1.0"));
}
