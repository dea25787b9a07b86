//! TUI message types (Elm Messages).

use std::time::Duration;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Elapsed time to feed the mounted demo.
    Tick(Duration),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Activity log line.
    Log(String),
    /// Quit the application.
    Quit,
}
