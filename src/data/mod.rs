//! Question source loading and validation.

mod loader;

pub use loader::{load_questions_from_json, LoadError};
