//! Character analysis shared by every assessment view.

/// Length at which the length criterion counts as met.
pub const MIN_RECOMMENDED_LENGTH: usize = 8;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";
const FEEDBACK_SPECIAL_CHARS: &str = "!@#";

/// Character sets tested by the analyzers.
///
/// `Special` and `FeedbackSpecial` are separate sets: the live feedback
/// checklist only recognizes `!`, `@` and `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
    FeedbackSpecial,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => SPECIAL_CHARS.contains(c),
            CharClass::FeedbackSpecial => FEEDBACK_SPECIAL_CHARS.contains(c),
        }
    }

    /// Returns `true` if any character of `text` belongs to this class.
    pub fn any_in(self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }

    /// Number of characters of `text` belonging to this class.
    pub fn count_in(self, text: &str) -> usize {
        text.chars().filter(|&c| self.contains(c)).count()
    }
}

/// Length and character-class composition of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CharacterAnalysis {
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_special_chars: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub uppercase_count: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub lowercase_count: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub number_count: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub special_count: usize,
    pub criteria_count: usize,
    pub character_types: usize,
}

impl CharacterAnalysis {
    /// Analyzes `text` as given, without trimming.
    pub fn of(text: &str) -> Self {
        let length = text.chars().count();
        let uppercase_count = CharClass::Uppercase.count_in(text);
        let lowercase_count = CharClass::Lowercase.count_in(text);
        let number_count = CharClass::Digit.count_in(text);
        let special_count = CharClass::Special.count_in(text);

        let criteria_count = [
            uppercase_count > 0,
            lowercase_count > 0,
            number_count > 0,
            special_count > 0,
            length >= MIN_RECOMMENDED_LENGTH,
        ]
        .iter()
        .filter(|&&met| met)
        .count();

        Self {
            length,
            has_uppercase: uppercase_count > 0,
            has_lowercase: lowercase_count > 0,
            has_numbers: number_count > 0,
            has_special_chars: special_count > 0,
            uppercase_count,
            lowercase_count,
            number_count,
            special_count,
            criteria_count,
            character_types: criteria_count,
        }
    }

    /// Trims leading and trailing whitespace and byte order marks, then analyzes.
    pub fn trimmed(text: &str) -> Self {
        Self::of(text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}'))
    }

    pub fn meets_length(&self) -> bool {
        self.length >= MIN_RECOMMENDED_LENGTH
    }
}
