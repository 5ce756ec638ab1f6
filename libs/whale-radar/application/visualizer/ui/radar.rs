//! Radar widget - rings, rotating sweep and transaction blips

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use super::kind_color;
use crate::application::radar::{CENTER, RING_RADII};
use crate::application::visualizer::App;

const SWEEP_RADIUS: f64 = 45.0;

/// Blip marker radius on the canvas for a blip size in [4, 16]
fn blip_radius(size: f64) -> f64 {
    size * 0.15
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.pulse_active() { " DEEP SCAN ((•)) " } else { " DEEP SCAN " };

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for radius in RING_RADII {
                ctx.draw(&Circle {
                    x: CENTER,
                    y: CENTER,
                    radius,
                    color: Color::DarkGray,
                });
            }

            ctx.draw(&CanvasLine::new(CENTER, 5.0, CENTER, 95.0, Color::DarkGray));
            ctx.draw(&CanvasLine::new(5.0, CENTER, 95.0, CENTER, Color::DarkGray));

            let (x2, y2) = app.sweep.endpoint(SWEEP_RADIUS);
            ctx.draw(&CanvasLine::new(CENTER, CENTER, x2, y2, Color::Cyan));

            ctx.layer();

            for blip in &app.blips {
                // Faded blips drop to a dimmer shade
                let color = if blip.opacity() > 0.5 {
                    kind_color(blip.kind)
                } else {
                    Color::DarkGray
                };
                ctx.draw(&Circle {
                    x: blip.x,
                    y: blip.y,
                    radius: blip_radius(blip.size),
                    color,
                });
            }

            ctx.print(CENTER, CENTER, Span::styled("+", Style::default().fg(Color::Cyan)));
        });

    frame.render_widget(canvas, area);
}
