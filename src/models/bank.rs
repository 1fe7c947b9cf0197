use std::fmt;

use super::Question;

/// The full set of loaded questions. Read-only after construction; sessions
/// refer to it by index and never copy question data.
pub struct QuestionBank {
    questions: Vec<Question>,
}

/// Informational warning for a bank smaller than the recommended inventory.
/// Sessions still run, shrunk to the bank size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowInventoryWarning {
    pub available: usize,
    pub recommended: usize,
}

impl fmt::Display for LowInventoryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "question bank holds {} questions, fewer than the recommended {}",
            self.available, self.recommended
        )
    }
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Warn when the bank is non-empty but below the recommended size.
    /// An empty bank is not a warning case; it is rejected outright when a
    /// session is started.
    pub fn low_inventory(&self, recommended: usize) -> Option<LowInventoryWarning> {
        if !self.is_empty() && self.len() < recommended {
            Some(LowInventoryWarning {
                available: self.len(),
                recommended,
            })
        } else {
            None
        }
    }
}
