//! Error type shared by the demo crates.

/// Configuration errors raised while assembling the demos.
///
/// Numeric inputs never error; they are clamped at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OerstedError {
    /// The quiz was handed no questions at all.
    #[error("question bank is empty")]
    EmptyQuestionBank,

    /// A question offers nothing to choose from.
    #[error("question {index} has no answer options")]
    QuestionWithoutOptions { index: usize },

    /// No option of a question is accepted by the active match policy.
    #[error("question {index} has no option matching its correct answer")]
    NoCorrectOption { index: usize },

    /// A tab name could not be resolved.
    #[error("unknown tab: {0}")]
    InvalidTab(String),
}
