//! Field visualizer panel: concentric rings and iron filings around a wire
//! seen end-on, with the intensity slider underneath.

use std::f64::consts::TAU;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use oersted_core::constants::PERSPECTIVE_GRID_LINES;
use oersted_core::field::FieldPatternRenderer;

use crate::gauge::render_intensity;
use crate::styles::ColorTheme;

const BOUND: f64 = 220.0;
const WIRE_RADIUS: f64 = 10.0;
const RING_SAMPLES: usize = 180;

/// Points along a ring squashed vertically by `vertical_scale`.
#[must_use]
pub fn ellipse_points(radius: f64, vertical_scale: f64, samples: usize) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|i| {
            let (sin, cos) = (TAU * i as f64 / samples as f64).sin_cos();
            (radius * cos, radius * sin * vertical_scale)
        })
        .collect()
}

/// Evenly spaced grid coordinates across the canvas.
fn grid_positions() -> impl Iterator<Item = f64> {
    let lines = PERSPECTIVE_GRID_LINES;
    (0..lines).map(move |i| -BOUND + (i as f64 + 0.5) * 2.0 * BOUND / lines as f64)
}

fn info_lines<'a>(field: &FieldPatternRenderer, theme: &ColorTheme) -> Vec<Line<'a>> {
    let snapshot = field.snapshot();
    let view = if field.perspective() {
        Span::styled("3D perspective", theme.header_style())
    } else {
        Span::styled("flat", theme.muted_style())
    };
    vec![
        Line::from(vec![
            Span::raw(format!(
                "Rings: {}   Filings: {}   View: ",
                snapshot.rings.len(),
                snapshot.filings.len()
            )),
            view,
        ]),
        Line::from(Span::styled(
            "The field forms concentric circles; it weakens with distance from the wire.",
            theme.muted_style(),
        )),
    ]
}

/// Render the field visualizer.
pub fn render_pattern(
    frame: &mut Frame,
    area: Rect,
    field: &FieldPatternRenderer,
    theme: &ColorTheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // canvas
            Constraint::Length(3), // slider
            Constraint::Length(3), // info
        ])
        .split(area);

    let snapshot = field.snapshot();
    let scale = field.vertical_scale();
    let perspective = field.perspective();

    let rings: Vec<_> = snapshot
        .rings
        .iter()
        .filter_map(|ring| {
            theme
                .ring_color(ring.opacity)
                .map(|color| (ellipse_points(ring.radius, scale, RING_SAMPLES), color))
        })
        .collect();
    let arrows: Vec<(f64, f64)> = snapshot
        .arrowed_rings()
        .filter(|ring| ring.opacity > 0.0)
        .map(|ring| (-2.0, ring.radius * scale))
        .collect();
    let filings: Vec<_> = if snapshot.filing_opacity() > 0.0 {
        snapshot
            .filings
            .iter()
            .map(|filing| {
                let ((x1, y1), (x2, y2)) = filing.endpoints();
                (x1, y1 * scale, x2, y2 * scale)
            })
            .collect()
    } else {
        Vec::new()
    };
    let glow = snapshot
        .glow()
        .map(|(diameter, _)| ellipse_points(diameter / 2.0, scale, RING_SAMPLES));
    let label = field.label();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Magnetic Field Visualizer "),
        )
        .marker(Marker::Braille)
        .x_bounds([-BOUND, BOUND])
        .y_bounds([-BOUND, BOUND])
        .paint(|ctx| {
            if perspective {
                for pos in grid_positions() {
                    ctx.draw(&CanvasLine {
                        x1: -BOUND,
                        y1: pos * scale,
                        x2: BOUND,
                        y2: pos * scale,
                        color: theme.muted,
                    });
                    ctx.draw(&CanvasLine {
                        x1: pos,
                        y1: -BOUND * scale,
                        x2: pos,
                        y2: BOUND * scale,
                        color: theme.muted,
                    });
                }
                ctx.layer();
            }
            if let Some(points) = &glow {
                ctx.draw(&Points {
                    coords: points,
                    color: theme.warning,
                });
            }
            for (points, color) in &rings {
                ctx.draw(&Points {
                    coords: points,
                    color: *color,
                });
            }
            for &(x1, y1, x2, y2) in &filings {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: theme.filing,
                });
            }
            ctx.layer();
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: WIRE_RADIUS,
                color: theme.wire,
            });
            ctx.print(-2.0, 0.0, "⊙");
            // Current out of the page circulates counterclockwise.
            for &(x, y) in &arrows {
                ctx.print(x, y, Span::styled("←", theme.header_style()));
            }
            ctx.print(
                -30.0,
                -WIRE_RADIUS - 18.0,
                Span::styled(label.clone(), theme.text_style()),
            );
        });
    frame.render_widget(canvas, chunks[0]);

    render_intensity(frame, chunks[1], field.intensity(), theme);

    let info = Paragraph::new(info_lines(field, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    frame.render_widget(info, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use oersted_core::field::Intensity;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(field: &FieldPatternRenderer) -> String {
        let backend = TestBackend::new(80, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_pattern(frame, area, field, &ColorTheme::default());
            })
            .unwrap();
        (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn ellipse_is_squashed() {
        let flat = ellipse_points(100.0, 1.0, 4);
        let tilted = ellipse_points(100.0, 0.5, 4);
        assert!((flat[1].1 - 100.0).abs() < 1e-9);
        assert!((tilted[1].1 - 50.0).abs() < 1e-9);
        assert!((tilted[0].0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn grid_stays_inside_canvas() {
        let positions: Vec<f64> = grid_positions().collect();
        assert_eq!(positions.len(), PERSPECTIVE_GRID_LINES);
        assert!(positions.iter().all(|p| p.abs() < BOUND));
    }

    #[test]
    fn shows_counts_and_slider() {
        let field = FieldPatternRenderer::seeded(Intensity::clamped(50), 7);
        let text = screen(&field);
        assert!(text.contains("Rings: 9"));
        assert!(text.contains("Filings: 50"));
        assert!(text.contains("50%"));
        assert!(text.contains("View: flat"));
    }

    #[test]
    fn perspective_is_reported() {
        let mut field = FieldPatternRenderer::seeded(Intensity::MAX, 7);
        field.toggle_perspective();
        let text = screen(&field);
        assert!(text.contains("3D perspective"));
    }

    #[test]
    fn zero_intensity_renders() {
        let field = FieldPatternRenderer::seeded(Intensity::MIN, 1);
        let text = screen(&field);
        assert!(text.contains("Filings: 0"));
    }
}
