//! gradetext CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod bank;
mod commands;

#[derive(Parser)]
#[command(
    name = "gradetext",
    version,
    about = "Grade free-text answers against reference answers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive quiz from a question bank
    Quiz {
        /// Path to a .toml question bank
        #[arg(long)]
        bank: PathBuf,

        /// Number of questions to sample
        #[arg(long, default_value = "5")]
        questions: usize,

        /// Maximum score per question
        #[arg(long, default_value = "1.0")]
        max_score: f64,

        /// Write the session results as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Score a single submission against a reference answer
    Score {
        /// The reference answer
        #[arg(long)]
        reference: String,

        /// The student submission
        #[arg(long)]
        submission: String,

        /// Maximum score
        #[arg(long, default_value = "1.0")]
        max_score: f64,

        /// Scoring policy: lexical, blend
        #[arg(long, default_value = "lexical")]
        policy: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Inspect the Jaro-Winkler match trace for two strings
    Detail {
        /// First string
        s1: String,

        /// Second string
        s2: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate a question bank TOML file
    Validate {
        /// Path to a .toml question bank
        #[arg(long)]
        bank: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradetext=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quiz {
            bank,
            questions,
            max_score,
            output,
        } => commands::quiz::execute(bank, questions, max_score, output),
        Commands::Score {
            reference,
            submission,
            max_score,
            policy,
            format,
        } => commands::score::execute(&reference, &submission, max_score, &policy, &format),
        Commands::Detail { s1, s2, format } => commands::detail::execute(&s1, &s2, &format),
        Commands::Validate { bank } => commands::validate::execute(bank),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
