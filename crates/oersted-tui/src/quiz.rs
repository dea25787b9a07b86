//! Right-hand-rule panel: the guide with its hand sketch, and the practice
//! quiz.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use oersted_core::questions::{QuestionRecord, WireDirection};
use oersted_core::quiz::{OptionMark, RuleQuiz};

use crate::styles::ColorTheme;

const HAND_RESTING: [&str; 5] = [
    "      ▲ I      ",
    "      ║        ",
    "    ┌─╨───┐    ",
    "    │ ≡≡≡ │    ",
    "    └─────┘    ",
];

const HAND_CURLED: [&str; 5] = [
    "      ▲ I      ",
    "   ↺  ║  ↺     ",
    "    ┌─╨───┐    ",
    "    │ ∩∩∩ │    ",
    "    └─────┘    ",
];

const STEPS: [(&str, &str); 3] = [
    (
        "Point your thumb",
        "Point your right thumb in the direction of the conventional current.",
    ),
    (
        "Curl your fingers",
        "Your fingers naturally curl around the wire.",
    ),
    (
        "Find the field direction",
        "Your curled fingers show the direction of the magnetic field.",
    ),
];

const REMEMBER: [&str; 4] = [
    "Always use your RIGHT hand (not left!)",
    "Thumb = Current direction (conventional, not electron flow)",
    "Fingers = Magnetic field direction",
    "The field forms concentric circles around the wire",
];

/// Letter label for the option at `index`.
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'a'.checked_add(i))
        .map_or('?', char::from)
}

/// Hand sketch for the current animation pose.
#[must_use]
pub fn hand_art(raised: bool) -> &'static [&'static str; 5] {
    if raised {
        &HAND_CURLED
    } else {
        &HAND_RESTING
    }
}

/// Small sketch of the wire carrying current in `direction`.
#[must_use]
pub fn wire_sketch(direction: WireDirection) -> Vec<String> {
    let arrow = direction.arrow();
    if direction.is_vertical() {
        vec![
            "│".to_string(),
            arrow.to_string(),
            "│".to_string(),
            arrow.to_string(),
            "│".to_string(),
        ]
    } else {
        vec![format!("──{arrow}────{arrow}──")]
    }
}

fn option_marker(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::SelectedCorrect | OptionMark::Revealed => " ✓",
        OptionMark::SelectedWrong => " ✗",
        OptionMark::Open | OptionMark::Dimmed => "",
    }
}

fn render_guide(frame: &mut Frame, area: Rect, quiz: &RuleQuiz, theme: &ColorTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // hand and steps
            Constraint::Length(6), // remember
            Constraint::Length(2), // last score and hint
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(19), Constraint::Min(20)])
        .split(chunks[0]);

    let hand: Vec<Line> = hand_art(quiz.hand().raised())
        .iter()
        .map(|row| Line::from(Span::styled(*row, theme.header_style())))
        .collect();
    frame.render_widget(
        Paragraph::new(hand).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Right hand "),
        ),
        top[0],
    );

    let mut steps = Vec::with_capacity(STEPS.len() * 2);
    for (i, (title, body)) in STEPS.iter().enumerate() {
        steps.push(Line::from(Span::styled(
            format!("{}. {title}", i + 1),
            theme.text_style().add_modifier(Modifier::BOLD),
        )));
        steps.push(Line::from(Span::styled(
            format!("   {body}"),
            theme.muted_style(),
        )));
    }
    frame.render_widget(
        Paragraph::new(steps).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" How to use the right-hand rule "),
        ),
        top[1],
    );

    let remember: Vec<Line> = REMEMBER
        .iter()
        .map(|point| Line::from(format!("• {point}")))
        .collect();
    frame.render_widget(
        Paragraph::new(remember).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Remember "),
        ),
        chunks[1],
    );

    let mut footer = Vec::with_capacity(2);
    if let Some(score) = quiz.last_score() {
        footer.push(Line::from(Span::styled(
            format!("Last practice: {score}/{}", quiz.bank().len()),
            theme.success_style(),
        )));
    }
    footer.push(Line::from(Span::styled(
        "Press s to start practice",
        theme.warning_style(),
    )));
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}

fn question_lines<'a>(quiz: &RuleQuiz, question: &QuestionRecord, theme: &ColorTheme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for row in wire_sketch(question.current_direction) {
        lines.push(Line::from(Span::styled(
            format!("   {row}"),
            theme.warning_style(),
        )));
    }
    lines.push(Line::default());
    for (i, option) in question.options.iter().enumerate() {
        let mark = quiz.option_mark(i);
        lines.push(Line::from(Span::styled(
            format!("{}) {option}{}", option_letter(i), option_marker(mark)),
            theme.option_style(mark),
        )));
    }
    lines
}

fn render_practice(frame: &mut Frame, area: Rect, quiz: &RuleQuiz, theme: &ColorTheme) {
    let (Some(session), Some(question)) = (quiz.session(), quiz.current_question()) else {
        return;
    };
    let total = quiz.bank().len();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress
            Constraint::Length(4), // prompt
            Constraint::Min(6),    // sketch and options
            Constraint::Length(1), // feedback
        ])
        .split(area);

    let progress = Line::from(vec![
        Span::styled(
            format!("Question {} of {total}", session.current_index + 1),
            theme.header_style(),
        ),
        Span::raw("   "),
        Span::styled(format!("Score: {}/{total}", session.score), theme.success_style()),
    ]);
    frame.render_widget(Paragraph::new(progress), chunks[0]);

    frame.render_widget(
        Paragraph::new(question.prompt)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title(" Practice "),
            ),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(question_lines(quiz, question, theme)),
        chunks[2],
    );

    let feedback = match session.selected.as_deref() {
        None => Line::from(Span::styled(
            "Choose a-d, or press g to return to the guide",
            theme.muted_style(),
        )),
        Some(selected) if quiz.policy().is_correct(selected, question.correct_answer) => {
            Line::from(Span::styled("Correct!", theme.success_style()))
        }
        Some(_) => Line::from(Span::styled(
            "Not quite. Use your right hand.",
            theme.error_style(),
        )),
    };
    frame.render_widget(Paragraph::new(feedback), chunks[3]);
}

/// Render the right-hand-rule panel for the quiz's current mode.
pub fn render_quiz(frame: &mut Frame, area: Rect, quiz: &RuleQuiz, theme: &ColorTheme) {
    if quiz.is_practicing() {
        render_practice(frame, area, quiz, theme);
    } else {
        render_guide(frame, area, quiz, theme);
    }
}
