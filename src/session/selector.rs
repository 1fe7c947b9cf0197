use std::fmt;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::models::QuestionBank;

/// The ordered bank indices chosen for one session. Indices are distinct;
/// length is `min(desired, bank.len())`.
pub type SessionPlan = Vec<usize>;

/// A session cannot be drawn from a bank with no questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyBankError;

impl fmt::Display for EmptyBankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question bank is empty, cannot start a session")
    }
}

impl std::error::Error for EmptyBankError {}

/// Draw the question order for one session.
///
/// Shuffles the full index range uniformly (Fisher-Yates via
/// `SliceRandom::shuffle`) and keeps the first `desired` entries, so the
/// plan never repeats an index and never pads when the bank is small. Each
/// call draws independently; nothing carries over between sessions.
pub fn select_plan(bank: &QuestionBank, desired: usize) -> Result<SessionPlan, EmptyBankError> {
    if bank.is_empty() {
        return Err(EmptyBankError);
    }

    let mut indices: Vec<usize> = (0..bank.len()).collect();
    indices.shuffle(&mut thread_rng());
    indices.truncate(desired.min(bank.len()));
    Ok(indices)
}
