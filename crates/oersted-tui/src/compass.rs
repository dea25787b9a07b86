//! Oersted's experiment panel: wire, flow markers and compass needle.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use oersted_core::current::{CurrentDirection, CurrentFieldDemo};

use crate::styles::ColorTheme;

const X_BOUNDS: [f64; 2] = [-200.0, 200.0];
const Y_BOUNDS: [f64; 2] = [-150.0, 150.0];
const WIRE_Y: f64 = 100.0;
const COMPASS_Y: f64 = -30.0;
const COMPASS_RADIUS: f64 = 40.0;
const NEEDLE_LENGTH: f64 = 34.0;
/// Maps the demo's pixel diameters onto canvas radii.
const RING_SCALE: f64 = 0.3;

const EXPLANATION: &str = "When electric current flows through the wire, it creates a circular \
magnetic field around it. This field interacts with the compass needle (itself a small magnet), \
causing it to deflect. Reversing the current reverses the field and deflects the needle the \
other way.";

/// North tip and south tail of the needle, rotated clockwise by `angle` degrees.
#[must_use]
pub fn needle_endpoints(angle: f64) -> ((f64, f64), (f64, f64)) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let dx = sin * NEEDLE_LENGTH;
    let dy = cos * NEEDLE_LENGTH;
    ((dx, COMPASS_Y + dy), (-dx, COMPASS_Y - dy))
}

/// Canvas x coordinate of a marker at `percent` along the wire.
#[must_use]
pub fn wire_x(percent: f64) -> f64 {
    X_BOUNDS[0] + percent / 100.0 * (X_BOUNDS[1] - X_BOUNDS[0])
}

fn status_lines<'a>(demo: &CurrentFieldDemo, theme: &ColorTheme) -> Vec<Line<'a>> {
    let needle = demo.needle();
    let current = if demo.is_on() {
        let arrow = match demo.direction() {
            CurrentDirection::Right => '→',
            CurrentDirection::Left => '←',
        };
        Span::styled(
            format!("ON ({arrow} {})", demo.direction().as_str()),
            theme.success_style(),
        )
    } else {
        Span::styled("OFF", theme.muted_style())
    };
    vec![
        Line::from(vec![Span::raw("Current: "), current]),
        Line::from(format!(
            "Needle: {:.1}°   Target: {:+.0}°   Flow offset: {:.0}",
            needle.angle,
            demo.target_angle(),
            needle.flow_offset
        )),
    ]
}

/// Render the compass demo.
pub fn render_compass(frame: &mut Frame, area: Rect, demo: &CurrentFieldDemo, theme: &ColorTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // experiment
            Constraint::Length(4), // status
            Constraint::Length(5), // explanation
        ])
        .split(area);

    let on = demo.is_on();
    let markers: Vec<(f64, f64)> = demo
        .flow_markers()
        .into_iter()
        .map(|pct| (wire_x(pct), WIRE_Y))
        .collect();
    let rings = demo.field_ring_diameters();
    let ring_color = theme.direction_color(demo.direction());
    let label = demo.deflection_label();
    let (tip, tail) = needle_endpoints(demo.needle().angle);
    let wire_color = if on { theme.warning } else { theme.wire };
    let arrow = match demo.direction() {
        CurrentDirection::Right => "I →",
        CurrentDirection::Left => "← I",
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Oersted's Experiment "),
        )
        .marker(Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(|ctx| {
            ctx.draw(&CanvasLine {
                x1: X_BOUNDS[0],
                y1: WIRE_Y,
                x2: X_BOUNDS[1],
                y2: WIRE_Y,
                color: wire_color,
            });
            ctx.draw(&Points {
                coords: &markers,
                color: theme.primary,
            });
            for diameter in &rings {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: COMPASS_Y,
                    radius: diameter * RING_SCALE,
                    color: ring_color,
                });
            }
            ctx.layer();
            ctx.draw(&Circle {
                x: 0.0,
                y: COMPASS_Y,
                radius: COMPASS_RADIUS,
                color: theme.border,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: COMPASS_Y,
                x2: tip.0,
                y2: tip.1,
                color: theme.error,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: COMPASS_Y,
                x2: tail.0,
                y2: tail.1,
                color: theme.text,
            });
            ctx.print(-3.0, COMPASS_Y + COMPASS_RADIUS + 8.0, "N");
            if on {
                ctx.print(-8.0, WIRE_Y + 18.0, Span::styled(arrow, theme.header_style()));
            }
            if let Some(text) = &label {
                ctx.print(
                    -10.0,
                    COMPASS_Y - COMPASS_RADIUS - 14.0,
                    Span::styled(text.clone(), Style::default().fg(theme.error)),
                );
            }
        });
    frame.render_widget(canvas, chunks[0]);

    let status = Paragraph::new(status_lines(demo, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Status "),
    );
    frame.render_widget(status, chunks[1]);

    let explanation = Paragraph::new(EXPLANATION)
        .style(theme.muted_style())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP).title(" What's happening? "));
    frame.render_widget(explanation, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(demo: &CurrentFieldDemo) -> String {
        let backend = TestBackend::new(90, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_compass(frame, area, demo, &ColorTheme::default());
            })
            .unwrap();
        (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn needle_points_north_at_rest() {
        let (tip, tail) = needle_endpoints(0.0);
        assert!(tip.0.abs() < 1e-9);
        assert!((tip.1 - (COMPASS_Y + NEEDLE_LENGTH)).abs() < 1e-9);
        assert!((tail.1 - (COMPASS_Y - NEEDLE_LENGTH)).abs() < 1e-9);
    }

    #[test]
    fn positive_angle_swings_east() {
        let (tip, _) = needle_endpoints(30.0);
        assert!(tip.0 > 0.0);
    }

    #[test]
    fn markers_span_the_wire() {
        assert!((wire_x(0.0) + 200.0).abs() < f64::EPSILON);
        assert!((wire_x(100.0) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn off_state_renders() {
        let text = screen(&CurrentFieldDemo::new());
        assert!(text.contains("Current: OFF"));
        assert!(text.contains("What's happening?"));
    }

    #[test]
    fn settled_needle_reports_deflection() {
        let mut demo = CurrentFieldDemo::new();
        demo.toggle();
        demo.advance(Duration::from_secs(2));
        let text = screen(&demo);
        assert!(text.contains("Current: ON"));
        assert!(text.contains("Needle: 30.0°"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_compass(frame, area, &CurrentFieldDemo::new(), &ColorTheme::default());
            })
            .unwrap();
    }
}
