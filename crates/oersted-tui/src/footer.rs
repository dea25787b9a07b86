//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use oersted_core::tabs::Tab;

/// Key hints shown for `tab`, as `(key, description)` pairs.
#[must_use]
pub fn shortcuts(tab: Tab, practicing: bool) -> Vec<(&'static str, &'static str)> {
    let mut keys = vec![("q", "quit"), ("tab", "next demo")];
    match tab {
        Tab::Oersted => {
            keys.push(("space", "current on/off"));
            keys.push(("r", "reverse"));
        }
        Tab::Field => {
            keys.push(("←/→", "intensity"));
            keys.push(("pgup/pgdn", "±10"));
            keys.push(("p", "3D view"));
        }
        Tab::RightHand if practicing => {
            keys.push(("a-d", "answer"));
            keys.push(("g", "guide"));
        }
        Tab::RightHand => keys.push(("s", "start practice")),
    }
    keys.push(("l", "logs"));
    keys
}

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, tab: Tab, practicing: bool) {
    let keys = shortcuts(tab, practicing);
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (i, (key, desc)) in keys.into_iter().enumerate() {
        let sep = if i == 0 { "" } else { " | " };
        spans.push(Span::raw(sep));
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {desc}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
