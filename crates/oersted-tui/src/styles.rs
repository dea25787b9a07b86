//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use oersted_core::current::CurrentDirection;
use oersted_core::quiz::OptionMark;

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub wire: Color,
    pub field: Color,
    pub filing: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            wire: Color::Rgb(184, 115, 51),
            field: Color::LightBlue,
            filing: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for success text.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Get the style for warning text.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get the style for panel borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Field ring color for the compass demo, per current direction.
    #[must_use]
    pub fn direction_color(&self, direction: CurrentDirection) -> Color {
        match direction {
            CurrentDirection::Right => self.success,
            CurrentDirection::Left => Color::Magenta,
        }
    }

    /// Ring color faded by opacity; `None` when invisible.
    #[must_use]
    pub fn ring_color(&self, opacity: f64) -> Option<Color> {
        if opacity <= 0.0 {
            None
        } else if opacity >= 0.6 {
            Some(self.field)
        } else if opacity >= 0.3 {
            Some(self.secondary)
        } else {
            Some(self.muted)
        }
    }

    /// Style of a quiz option.
    #[must_use]
    pub fn option_style(&self, mark: OptionMark) -> Style {
        match mark {
            OptionMark::Open => self.text_style(),
            OptionMark::SelectedCorrect => self.success_style().add_modifier(Modifier::BOLD),
            OptionMark::SelectedWrong => self.error_style().add_modifier(Modifier::BOLD),
            OptionMark::Revealed => self.success_style(),
            OptionMark::Dimmed => self.muted_style(),
        }
    }
}
