use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::models::{OptionKey, Question};

/// A question record as it appears in the JSON source. All fields are raw
/// strings; validation into [`Question`] happens after deserialization.
#[derive(Deserialize)]
struct QuestionRecord {
    question: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    answer: String,
}

/// Error loading the question source. Always fatal: the application must
/// not start a session from a source it could not fully validate.
#[derive(Debug)]
pub enum LoadError {
    /// The source file could not be read.
    Read(io::Error),
    /// The source was not a valid JSON list of question records.
    Parse(serde_json::Error),
    /// A record deserialized but failed validation.
    InvalidQuestion { index: usize, reason: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read(e) => write!(f, "could not read question source: {}", e),
            LoadError::Parse(e) => write!(f, "could not parse question source: {}", e),
            LoadError::InvalidQuestion { index, reason } => {
                write!(f, "invalid question at index {}: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::InvalidQuestion { .. } => None,
        }
    }
}

/// Load and validate questions from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let json = fs::read_to_string(path.as_ref()).map_err(LoadError::Read)?;
    parse_questions(&json)
}

fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json).map_err(LoadError::Parse)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect()
}

fn validate_record(index: usize, record: QuestionRecord) -> Result<Question, LoadError> {
    let fields = [
        ("question", &record.question),
        ("option_a", &record.option_a),
        ("option_b", &record.option_b),
        ("option_c", &record.option_c),
        ("option_d", &record.option_d),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(LoadError::InvalidQuestion {
                index,
                reason: format!("field '{}' is empty", name),
            });
        }
    }

    let correct = OptionKey::from_token(&record.answer).ok_or_else(|| LoadError::InvalidQuestion {
        index,
        reason: format!(
            "answer token '{}' is not one of option_a..option_d",
            record.answer
        ),
    })?;

    Ok(Question {
        text: record.question,
        options: [
            record.option_a,
            record.option_b,
            record.option_c,
            record.option_d,
        ],
        correct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ARK_QUESTION: &str = r#"[{
        "question": "Who built the ark?",
        "option_a": "Noah",
        "option_b": "Moses",
        "option_c": "David",
        "option_d": "Abraham",
        "answer": "option_a"
    }]"#;

    #[test]
    fn test_parse_valid_record() {
        let questions = parse_questions(ARK_QUESTION).unwrap();
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.text, "Who built the ark?");
        assert_eq!(q.options[0], "Noah");
        assert_eq!(q.correct, OptionKey::A);
        assert_eq!(q.option(OptionKey::A), "Noah");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_questions("not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let json = r#"[{"question": "q", "option_a": "a", "answer": "option_a"}]"#;
        let err = parse_questions(json).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_answer_token() {
        let json = ARK_QUESTION.replace(r#""answer": "option_a""#, r#""answer": "option_e""#);
        let err = parse_questions(&json).unwrap_err();
        match err {
            LoadError::InvalidQuestion { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("option_e"));
            }
            other => panic!("expected InvalidQuestion, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_option() {
        let json = ARK_QUESTION.replace(r#""option_c": "David""#, r#""option_c": "  ""#);
        let err = parse_questions(&json).unwrap_err();
        match err {
            LoadError::InvalidQuestion { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("option_c"));
            }
            other => panic!("expected InvalidQuestion, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_list_is_ok() {
        // An empty bank only becomes an error when a session is started.
        let questions = parse_questions("[]").unwrap();
        assert!(questions.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ARK_QUESTION.as_bytes()).unwrap();
        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_questions_from_json("/no/such/file.json").unwrap_err();
        assert!(matches!(err, LoadError::Read(_)));
    }
}
