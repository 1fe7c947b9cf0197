use std::path::PathBuf;

use clap::Parser;
use timed_quiz::config::{DEFAULT_MIN_BANK_SIZE, DEFAULT_SESSION_SIZE, DEFAULT_TIME_LIMIT_SECS};
use timed_quiz::{Quiz, QuizConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: PathBuf,

    /// Questions per session (shrinks when the bank is smaller)
    #[arg(long, default_value_t = DEFAULT_SESSION_SIZE)]
    count: usize,

    /// Seconds allowed per question
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    time_limit: u16,

    /// Bank size below which a low-inventory warning is printed
    #[arg(long, default_value_t = DEFAULT_MIN_BANK_SIZE)]
    min_bank: usize,
}

fn main() {
    let args = Args::parse();
    let config = QuizConfig {
        session_size: args.count,
        time_limit: args.time_limit,
        min_bank_size: args.min_bank,
    };

    let quiz = match Quiz::from_json(&args.questions, config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error loading {}: {}", args.questions.display(), e);
            std::process::exit(1);
        }
    };

    if let Some(warning) = quiz.inventory_warning() {
        eprintln!("Warning: {}", warning);
    }

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
