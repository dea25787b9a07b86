//! Activity log panel with scrolling.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Scroll state for the log panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// Current scroll offset (first visible line index).
    pub offset: usize,
    /// Whether the view follows the newest entry.
    pub auto_scroll: bool,
}

impl LogScrollState {
    /// Create a new scroll state following the newest entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Follow a newly appended entry when auto-scroll is on.
    pub fn on_new_message(&mut self, total_logs: usize) {
        if self.auto_scroll {
            self.offset = total_logs.saturating_sub(1);
        }
    }

    /// Keep the same lines in view after the oldest entry was dropped.
    pub fn on_oldest_dropped(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down by one line; reaching the end resumes auto-scroll.
    pub fn scroll_down(&mut self, total_logs: usize) {
        let last = total_logs.saturating_sub(1);
        self.offset = (self.offset + 1).min(last);
        if self.offset >= last {
            self.auto_scroll = true;
        }
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// First line to draw so that `offset` stays visible in `visible_height` rows.
#[must_use]
pub fn first_visible(offset: usize, total: usize, visible_height: usize) -> usize {
    if total <= visible_height {
        0
    } else {
        offset
            .saturating_sub(visible_height.saturating_sub(1))
            .min(total - visible_height)
    }
}

/// Render the log panel.
pub fn render_logs(
    frame: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll: &LogScrollState,
    theme: &ColorTheme,
) {
    let visible_height = area.height.saturating_sub(2) as usize; // borders
    let total = logs.len();
    let start = first_visible(scroll.offset, total, visible_height);

    let items: Vec<ListItem> = logs
        .iter()
        .skip(start)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                theme.error_style()
            } else if log.starts_with("[WARN]") {
                theme.warning_style()
            } else {
                theme.text_style()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if total > visible_height {
        let pct = (scroll.offset * 100) / total.saturating_sub(1).max(1);
        format!(" Logs ({pct}%) ")
    } else {
        " Logs ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.muted_style()),
    );

    frame.render_widget(list, area);
}
