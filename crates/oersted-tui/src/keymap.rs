//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Slider step for page keys.
pub const INTENSITY_PAGE: i64 = 10;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextTab,
    PreviousTab,
    SelectTab(usize),
    ToggleCurrent,
    ReverseCurrent,
    /// Move the intensity slider by a signed step.
    NudgeIntensity(i64),
    /// Jump the intensity slider to a value.
    SetIntensity(i64),
    TogglePerspective,
    StartPractice,
    Answer(usize),
    ReturnToGuide,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => KeyAction::NextTab,
        KeyCode::BackTab => KeyAction::PreviousTab,
        KeyCode::Char(c @ '1'..='3') => KeyAction::SelectTab(c as usize - '1' as usize),
        KeyCode::Char(' ' | 'o') => KeyAction::ToggleCurrent,
        KeyCode::Char('r') => KeyAction::ReverseCurrent,
        KeyCode::Right => KeyAction::NudgeIntensity(1),
        KeyCode::Left => KeyAction::NudgeIntensity(-1),
        KeyCode::PageUp => KeyAction::NudgeIntensity(INTENSITY_PAGE),
        KeyCode::PageDown => KeyAction::NudgeIntensity(-INTENSITY_PAGE),
        KeyCode::Home => KeyAction::SetIntensity(0),
        KeyCode::End => KeyAction::SetIntensity(100),
        KeyCode::Char('p') => KeyAction::TogglePerspective,
        KeyCode::Char('s') | KeyCode::Enter => KeyAction::StartPractice,
        KeyCode::Char(c @ 'a'..='d') => KeyAction::Answer(c as usize - 'a' as usize),
        KeyCode::Char('g') => KeyAction::ReturnToGuide,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        _ => KeyAction::None,
    }
}
