/// One of the four answer slots of a question.
///
/// The data source identifies the correct answer with a literal token
/// (`option_a`..`option_d`); the loader resolves that token into this enum
/// once, so answer checking is an exact enum comparison rather than a
/// string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];

    /// Resolve an answer token from the data source.
    ///
    /// Tokens are trimmed and lowercased before matching, so `"Option_A"`
    /// and `" option_a "` both resolve. Anything else is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "option_a" => Some(OptionKey::A),
            "option_b" => Some(OptionKey::B),
            "option_c" => Some(OptionKey::C),
            "option_d" => Some(OptionKey::D),
            _ => None,
        }
    }

    /// Key for a 0-based option position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 0-based position of this option.
    pub fn index(self) -> usize {
        match self {
            OptionKey::A => 0,
            OptionKey::B => 1,
            OptionKey::C => 2,
            OptionKey::D => 3,
        }
    }

    /// Display label ('A'..'D').
    pub fn label(self) -> char {
        match self {
            OptionKey::A => 'A',
            OptionKey::B => 'B',
            OptionKey::C => 'C',
            OptionKey::D => 'D',
        }
    }
}

/// A validated question. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Question {
    pub text: String,
    /// Options in A..D order.
    pub options: [String; 4],
    pub correct: OptionKey,
}

impl Question {
    /// Text of the option behind a key.
    pub fn option(&self, key: OptionKey) -> &str {
        &self.options[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_accepts_the_four_literals() {
        assert_eq!(OptionKey::from_token("option_a"), Some(OptionKey::A));
        assert_eq!(OptionKey::from_token("option_b"), Some(OptionKey::B));
        assert_eq!(OptionKey::from_token("option_c"), Some(OptionKey::C));
        assert_eq!(OptionKey::from_token("option_d"), Some(OptionKey::D));
    }

    #[test]
    fn test_from_token_normalizes_case_and_whitespace() {
        assert_eq!(OptionKey::from_token("Option_A"), Some(OptionKey::A));
        assert_eq!(OptionKey::from_token("  option_d "), Some(OptionKey::D));
    }

    #[test]
    fn test_from_token_rejects_anything_else() {
        assert_eq!(OptionKey::from_token("option_e"), None);
        assert_eq!(OptionKey::from_token("a"), None);
        assert_eq!(OptionKey::from_token(""), None);
        assert_eq!(OptionKey::from_token("Noah"), None);
    }

    #[test]
    fn test_index_round_trip() {
        for key in OptionKey::ALL {
            assert_eq!(OptionKey::from_index(key.index()), Some(key));
        }
        assert_eq!(OptionKey::from_index(4), None);
    }
}
