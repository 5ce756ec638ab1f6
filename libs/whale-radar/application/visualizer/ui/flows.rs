//! Exchange flow bars - inflow/outflow per exchange with net change

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::application::format::{format_flow, format_net_flow};
use crate::application::visualizer::App;
use crate::domain::ExchangeFlow;

const BAR_WIDTH: usize = 16;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let stats = &app.snapshot.stats;
    let max_flow = stats.max_flow();

    let mut lines = Vec::with_capacity(stats.flows.len() * 3 + 2);
    for flow in &stats.flows {
        lines.extend(flow_lines(flow, max_flow));
    }
    lines.push(Line::from(Span::styled(
        " Inflow = potential selling pressure",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        " Outflow = accumulation signal",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" EXCHANGE WALLET FLOWS "));
    frame.render_widget(widget, area);
}

fn flow_lines(flow: &ExchangeFlow, max_flow: f64) -> Vec<Line<'static>> {
    let net_color = if flow.net > 0.0 {
        Color::Green
    } else if flow.net < 0.0 {
        Color::Red
    } else {
        Color::DarkGray
    };

    vec![
        Line::from(vec![
            Span::styled(
                format!(" {:<10}", flow.exchange),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format_net_flow(flow.net), Style::default().fg(net_color)),
        ]),
        Line::from(vec![
            Span::raw("  IN  "),
            Span::styled(bar(flow.inflow, max_flow, BAR_WIDTH), Style::default().fg(Color::Green)),
            Span::raw(format!(" {}", format_flow(flow.inflow))),
        ]),
        Line::from(vec![
            Span::raw("  OUT "),
            Span::styled(bar(flow.outflow, max_flow, BAR_WIDTH), Style::default().fg(Color::Red)),
            Span::raw(format!(" {}", format_flow(flow.outflow))),
        ]),
    ]
}

/// Fixed-width bar filled in proportion to `value / max`
fn bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
