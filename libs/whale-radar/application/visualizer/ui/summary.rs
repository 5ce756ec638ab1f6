//! Whale activity summary - volume, per-kind counts and buy pressure gauge

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::kind_color;
use crate::application::format::format_volume;
use crate::application::visualizer::App;
use crate::domain::TxKind;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" WHALE ACTIVITY ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Volume
            Constraint::Length(4), // Counts
            Constraint::Length(3), // Pressure gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let stats = &app.snapshot.stats;

    let volume = Paragraph::new(vec![
        Line::from(Span::styled(" VOLUME TRACKED", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!(" {}", format_volume(stats.total_volume)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(volume, chunks[0]);

    let counts = Paragraph::new(vec![
        count_line("↑ BUYING ", stats.buy_count, TxKind::Buy),
        count_line("↓ SELLING", stats.sell_count, TxKind::Sell),
        count_line("⚠ UNUSUAL", stats.unusual_count, TxKind::Unusual),
    ]);
    frame.render_widget(counts, chunks[1]);

    let pressure = stats.buy_pressure.clamp(0.0, 100.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" MARKET PRESSURE "))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Red))
        .percent(pressure.round() as u16)
        .label(format!("{:.0}% BUY", pressure));
    frame.render_widget(gauge, chunks[2]);
}

fn count_line(label: &'static str, count: usize, kind: TxKind) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {} ", label), Style::default().fg(kind_color(kind))),
        Span::styled(
            format!("{:>4}", count),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])
}
