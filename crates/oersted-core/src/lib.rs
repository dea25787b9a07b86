//! # oersted-core
//!
//! UI-free model of the electromagnetism demos: the compass/wire state
//! machine, the field pattern generator, the right-hand-rule quiz and the
//! tab container that mounts them. Everything is driven by a virtual clock
//! through `advance(dt)`.

pub mod constants;
pub mod current;
pub mod error;
pub mod field;
pub mod questions;
pub mod quiz;
pub mod tabs;
pub mod timer;

pub use current::{CurrentDirection, CurrentFieldDemo, CurrentState, NeedleState};
pub use error::OerstedError;
pub use field::{FieldPatternRenderer, FieldSnapshot, Filing, Intensity, Ring};
pub use questions::{FieldAnswer, MatchPolicy, QuestionBank, QuestionRecord, WireDirection};
pub use quiz::{AnswerOutcome, OptionMark, QuizMode, QuizSession, RuleQuiz};
pub use tabs::{ActiveView, DemoSettings, Tab, TabContainer};
pub use timer::{Interval, Timeout, TimerSlot};
