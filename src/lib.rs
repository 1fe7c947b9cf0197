//! # timed-quiz
//!
//! A terminal-based, timed multiple-choice quiz.
//!
//! Loads a bank of question records from JSON, draws a random subset for
//! each session, asks the questions one at a time against a countdown, and
//! reports the score at the end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json", QuizConfig::default())?;
//!
//!     if let Some(warning) = quiz.inventory_warning() {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Reveal, Screen};
pub use config::QuizConfig;
pub use data::{load_questions_from_json, LoadError};
pub use models::{LowInventoryWarning, OptionKey, Question, QuestionBank};
pub use session::EmptyBankError;

/// How long the event loop waits for input before checking the clock.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// The loaded bank has no questions to ask.
    EmptyBank(EmptyBankError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::EmptyBank(e) => write!(f, "Cannot run quiz: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::EmptyBank(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<EmptyBankError> for QuizError {
    fn from(err: EmptyBankError) -> Self {
        QuizError::EmptyBank(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz over an already-loaded question bank.
    ///
    /// Fails with [`QuizError::EmptyBank`] when there are no questions at
    /// all; no session could ever start.
    pub fn new(questions: Vec<Question>, config: QuizConfig) -> Result<Self, QuizError> {
        let bank = QuestionBank::new(questions);
        if bank.is_empty() {
            return Err(EmptyBankError.into());
        }
        Ok(Self {
            app: App::new(bank, config),
        })
    }

    /// Load a quiz from a JSON file of question records.
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions, config)
    }

    /// Non-fatal warning when the bank is smaller than the configured
    /// recommended minimum. Sessions shrink to the bank size.
    pub fn inventory_warning(&self) -> Option<LowInventoryWarning> {
        self.app.bank().low_inventory(self.app.config().min_bank_size)
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, displays the quiz UI, and returns when the
    /// user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(app, key.code) {
                    break;
                }
            }
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
        Screen::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            // The bank was checked non-empty at construction.
            let _ = app.start_session(Instant::now());
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_answer(Instant::now());
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
