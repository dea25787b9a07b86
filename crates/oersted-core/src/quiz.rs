//! Right-hand-rule guide and practice quiz.

use std::time::Duration;

use crate::constants::{ANSWER_ADVANCE_DELAY, HAND_ANIMATION_PERIOD, QUIZ_FINISH_DELAY};
use crate::questions::{MatchPolicy, QuestionBank, QuestionRecord};
use crate::timer::{Interval, Timeout, TimerSlot};

/// Progress through one practice run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSession {
    pub current_index: usize,
    pub selected: Option<String>,
    pub score: u32,
}

/// Guide or practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizMode {
    Guide,
    Practice(QuizSession),
}

/// Transition scheduled after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizStep {
    Advance,
    Finish,
}

/// Result of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub score: u32,
}

/// How an option should be drawn in the practice view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// Nothing chosen yet.
    Open,
    /// The chosen option, judged correct.
    SelectedCorrect,
    /// The chosen option, judged wrong.
    SelectedWrong,
    /// Not chosen, but correct.
    Revealed,
    /// Not chosen and wrong.
    Dimmed,
}

/// Right-hand illustration toggling between two poses.
#[derive(Debug, Clone)]
pub struct HandAnimation {
    raised: bool,
    timer: TimerSlot<Interval>,
}

impl HandAnimation {
    #[must_use]
    pub fn new() -> Self {
        let mut timer = TimerSlot::new();
        timer.arm(Interval::new(HAND_ANIMATION_PERIOD));
        Self {
            raised: false,
            timer,
        }
    }

    /// Whether the thumb/fingers are in the animated pose.
    #[must_use]
    pub fn raised(&self) -> bool {
        self.raised
    }

    pub fn advance(&mut self, dt: Duration) {
        let fires = self.timer.advance(dt);
        if fires % 2 == 1 {
            self.raised = !self.raised;
        }
    }
}

impl Default for HandAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Quiz state machine.
#[derive(Debug, Clone)]
pub struct RuleQuiz {
    bank: QuestionBank,
    policy: MatchPolicy,
    mode: QuizMode,
    pending: TimerSlot<Timeout<QuizStep>>,
    last_score: Option<u32>,
    hand: HandAnimation,
}

impl RuleQuiz {
    /// Quiz over `bank`, judging answers with `policy`. Starts in the guide.
    #[must_use]
    pub fn new(bank: QuestionBank, policy: MatchPolicy) -> Self {
        Self {
            bank,
            policy,
            mode: QuizMode::Guide,
            pending: TimerSlot::new(),
            last_score: None,
            hand: HandAnimation::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> &QuizMode {
        &self.mode
    }

    #[must_use]
    pub fn is_practicing(&self) -> bool {
        matches!(self.mode, QuizMode::Practice(_))
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    #[must_use]
    pub fn hand(&self) -> &HandAnimation {
        &self.hand
    }

    /// Active session, if practicing.
    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.mode {
            QuizMode::Practice(s) => Some(s),
            QuizMode::Guide => None,
        }
    }

    /// Question index (0 in the guide).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session().map_or(0, |s| s.current_index)
    }

    /// Running score (0 in the guide).
    #[must_use]
    pub fn score(&self) -> u32 {
        self.session().map_or(0, |s| s.score)
    }

    /// Final score of the last completed run.
    #[must_use]
    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    /// Question on screen, if practicing.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.session().and_then(|s| self.bank.get(s.current_index))
    }

    /// Whether a transition is scheduled.
    #[must_use]
    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_active()
    }

    /// Begin a fresh practice run from any state.
    pub fn start_practice(&mut self) {
        self.pending.cancel();
        self.mode = QuizMode::Practice(QuizSession::default());
        tracing::debug!(questions = self.bank.len(), "practice started");
    }

    /// Leave practice without finishing.
    pub fn return_to_guide(&mut self) {
        self.pending.cancel();
        self.mode = QuizMode::Guide;
        tracing::debug!("returned to guide");
    }

    /// Submit the option at `index` of the current question.
    pub fn select_option(&mut self, index: usize) -> Option<AnswerOutcome> {
        let option = *self.current_question()?.options.get(index)?;
        self.select(option)
    }

    /// Submit `answer` for the current question. Ignored outside practice
    /// and once an answer has been recorded for this question.
    pub fn select(&mut self, answer: &str) -> Option<AnswerOutcome> {
        let QuizMode::Practice(session) = &mut self.mode else {
            return None;
        };
        if session.selected.is_some() {
            return None;
        }
        let question = self.bank.get(session.current_index)?;
        let correct = self.policy.is_correct(answer, question.correct_answer);
        session.selected = Some(answer.to_string());
        if correct {
            session.score += 1;
        }
        let score = session.score;
        tracing::debug!(
            index = session.current_index,
            answer,
            correct,
            score,
            "answer recorded"
        );
        self.pending
            .arm(Timeout::new(ANSWER_ADVANCE_DELAY, QuizStep::Advance));
        Some(AnswerOutcome { correct, score })
    }

    /// Mark for the option at `index` of the current question.
    #[must_use]
    pub fn option_mark(&self, index: usize) -> OptionMark {
        let (Some(session), Some(question)) = (self.session(), self.current_question()) else {
            return OptionMark::Open;
        };
        let Some(option) = question.options.get(index) else {
            return OptionMark::Open;
        };
        let Some(selected) = session.selected.as_deref() else {
            return OptionMark::Open;
        };
        let correct = self.policy.is_correct(option, question.correct_answer);
        match (selected == *option, correct) {
            (true, true) => OptionMark::SelectedCorrect,
            (true, false) => OptionMark::SelectedWrong,
            (false, true) => OptionMark::Revealed,
            (false, false) => OptionMark::Dimmed,
        }
    }

    /// Feed elapsed time to the hand animation and pending transitions.
    pub fn advance(&mut self, dt: Duration) {
        self.hand.advance(dt);
        let mut remaining = dt;
        while let Some((step, leftover)) = self.pending.advance(remaining) {
            self.apply(step);
            remaining = leftover;
        }
    }

    fn apply(&mut self, step: QuizStep) {
        let total = self.bank.len();
        let QuizMode::Practice(session) = &mut self.mode else {
            return;
        };
        match step {
            QuizStep::Advance if session.current_index + 1 < total => {
                session.current_index += 1;
                session.selected = None;
                tracing::debug!(index = session.current_index, "next question");
            }
            QuizStep::Advance => {
                self.pending
                    .arm(Timeout::new(QUIZ_FINISH_DELAY, QuizStep::Finish));
            }
            QuizStep::Finish => {
                self.last_score = Some(session.score);
                tracing::debug!(score = session.score, total, "practice finished");
                self.mode = QuizMode::Guide;
            }
        }
    }
}
