//! UI widgets for the visualizer

pub mod feed;
pub mod flows;
pub mod radar;
pub mod summary;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::App;
use crate::domain::TxKind;

/// Colour used for a transaction kind everywhere in the dashboard
pub fn kind_color(kind: TxKind) -> Color {
    match kind {
        TxKind::Buy => Color::Cyan,
        TxKind::Sell => Color::Red,
        TxKind::Unusual => Color::Yellow,
        TxKind::Exchange => Color::Magenta,
    }
}

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(0),     // Dashboard grid
            Constraint::Length(3),  // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_main(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let dot_style = if app.pulse_active() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let header_line = Line::from(vec![
        Span::styled(" WHALE", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled("RADAR ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("●", dot_style),
        Span::raw(" LIVE TRACKING"),
    ]);

    let header = Paragraph::new(header_line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_main(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    radar::draw(frame, app, top[0]);
    summary::draw(frame, app, top[1]);
    feed::draw(frame, app, bottom[0]);
    flows::draw(frame, app, bottom[1]);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer_text = format!(
        " Buffer: {}/{} | Update #{} | q=quit tab/←→=filter 1-5=select",
        app.snapshot.transactions.len(),
        app.capacity,
        app.snapshot.version
    );

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
