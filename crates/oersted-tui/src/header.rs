//! TUI header panel: title and tab bar.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use oersted_core::tabs::Tab;

use crate::styles::ColorTheme;

/// Render the header panel with the active tab highlighted.
pub fn render_header(frame: &mut Frame, area: Rect, active: Tab, theme: &ColorTheme) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!("{} {}", t.index() + 1, t.title())))
        .collect();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style())
        .title(Span::styled(
            " Oersted's Experiment Teaching Aid ",
            theme.header_style(),
        ));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(active.index())
        .style(theme.muted_style())
        .highlight_style(theme.header_style())
        .divider(" | ");
    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn header_lists_all_tabs() {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, Tab::Field, &ColorTheme::default());
            })
            .unwrap();

        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(content.contains("Oersted's Experiment"));
        assert!(content.contains("Magnetic Field Visualizer"));
        assert!(content.contains("Right-Hand Rule"));
    }
}
