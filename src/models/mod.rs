//! Core data model: questions, option keys, and the question bank.

mod bank;
mod question;

pub use bank::{LowInventoryWarning, QuestionBank};
pub use question::{OptionKey, Question};
