//! Right-hand-rule question records and the validated bank.

use serde::Serialize;

use crate::error::OerstedError;

/// Direction of the current drawn next to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireDirection {
    Up,
    Down,
    Left,
    Right,
}

impl WireDirection {
    /// Arrow glyph for the wire sketch.
    #[must_use]
    pub fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
            Self::Left => '←',
            Self::Right => '→',
        }
    }

    /// Whether the wire is drawn vertically.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Keyword an option must carry to be judged correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldAnswer {
    Clockwise,
    Counterclockwise,
    Up,
    Down,
    Into,
    Out,
}

impl FieldAnswer {
    /// Lowercase keyword matched against option text.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Clockwise => "clockwise",
            Self::Counterclockwise => "counterclockwise",
            Self::Up => "up",
            Self::Down => "down",
            Self::Into => "into",
            Self::Out => "out",
        }
    }
}

/// One practice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub prompt: &'static str,
    pub current_direction: WireDirection,
    pub correct_answer: FieldAnswer,
    pub options: &'static [&'static str],
}

/// Built-in practice questions.
pub static BUILTIN_QUESTIONS: [QuestionRecord; 3] = [
    QuestionRecord {
        prompt: "Current flows upward. What is the direction of the magnetic field on the right side?",
        current_direction: WireDirection::Up,
        correct_answer: FieldAnswer::Out,
        options: &["Into the page", "Out of the page", "Upward", "Downward"],
    },
    QuestionRecord {
        prompt: "Current flows to the right. What is the direction of the magnetic field above the wire?",
        current_direction: WireDirection::Right,
        correct_answer: FieldAnswer::Out,
        options: &["Into the page", "Out of the page", "Left", "Right"],
    },
    QuestionRecord {
        prompt: "Current flows downward. What is the direction of the magnetic field on the left side?",
        current_direction: WireDirection::Down,
        correct_answer: FieldAnswer::Out,
        options: &["Into the page", "Out of the page", "Upward", "Downward"],
    },
];

/// How an option's text is compared with the correct-answer keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Case-insensitive substring: "Outward" and "Without" both contain "out".
    #[default]
    Substring,
    /// Case-insensitive whole word.
    WholeWord,
}

impl MatchPolicy {
    /// Judge `option` against `answer`.
    #[must_use]
    pub fn is_correct(self, option: &str, answer: FieldAnswer) -> bool {
        let option = option.to_lowercase();
        let keyword = answer.keyword();
        match self {
            Self::Substring => option.contains(keyword),
            Self::WholeWord => option
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| word == keyword),
        }
    }
}

/// Non-empty, validated list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Validate `questions` under `policy`.
    ///
    /// Fails when the list is empty, a question has no options, or no
    /// option of a question would ever be judged correct.
    pub fn new(questions: Vec<QuestionRecord>, policy: MatchPolicy) -> Result<Self, OerstedError> {
        if questions.is_empty() {
            return Err(OerstedError::EmptyQuestionBank);
        }
        for (index, q) in questions.iter().enumerate() {
            if q.options.is_empty() {
                return Err(OerstedError::QuestionWithoutOptions { index });
            }
            if !q
                .options
                .iter()
                .any(|o| policy.is_correct(o, q.correct_answer))
            {
                return Err(OerstedError::NoCorrectOption { index });
            }
        }
        Ok(Self { questions })
    }

    /// The built-in bank.
    pub fn builtin(policy: MatchPolicy) -> Result<Self, OerstedError> {
        Self::new(BUILTIN_QUESTIONS.to_vec(), policy)
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    /// All questions in order.
    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }
}
