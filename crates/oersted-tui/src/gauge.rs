//! Intensity slider drawn as a gauge.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use oersted_core::field::Intensity;

use crate::styles::ColorTheme;

/// Render the intensity slider.
pub fn render_intensity(frame: &mut Frame, area: Rect, intensity: Intensity, theme: &ColorTheme) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Current Intensity "),
        )
        .gauge_style(Style::default().fg(theme.warning))
        .ratio(intensity.strength().clamp(0.0, 1.0))
        .label(format!("{}%", intensity.percent()));

    frame.render_widget(gauge, area);
}
