//! Transaction feed - filter tabs over a scrolling list

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Tabs},
    Frame,
};

use super::kind_color;
use crate::application::format::{format_age, format_amount, format_usd};
use crate::application::visualizer::App;
use crate::domain::{Direction as FlowDirection, FeedFilter, Transaction};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" TRANSACTION FEED ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let selected = FeedFilter::ALL
        .iter()
        .position(|f| *f == app.filter)
        .unwrap_or_default();
    let tabs = Tabs::new(FeedFilter::ALL.iter().map(|f| f.label()).collect::<Vec<_>>())
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let now = Utc::now();
    let items: Vec<ListItem> = app
        .visible_transactions()
        .into_iter()
        .map(|tx| {
            let age = now.signed_duration_since(tx.timestamp()).num_seconds();
            ListItem::new(row(tx, age))
        })
        .collect();

    frame.render_widget(List::new(items), chunks[1]);
}

fn row(tx: &Transaction, age_secs: i64) -> Line<'static> {
    let color = kind_color(tx.kind());

    let mut spans = vec![
        Span::styled(format!(" {:<8}", tx.kind().label()), Style::default().fg(color)),
        Span::raw(format!("{}  ", tx.wallet())),
        Span::styled(
            format!("{} {:<5}", format_amount(tx.amount()), tx.token()),
            Style::default().fg(Color::White),
        ),
    ];

    if let (Some(exchange), Some(direction)) = (tx.exchange(), tx.direction()) {
        let arrow = match direction {
            FlowDirection::In => "→",
            FlowDirection::Out => "←",
        };
        spans.push(Span::styled(
            format!(" {} {}", arrow, exchange),
            Style::default().fg(Color::Magenta),
        ));
    }

    spans.push(Span::styled(
        format!("  {}", format_usd(tx.usd_value())),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("  {}", format_age(age_secs)),
        Style::default().fg(Color::DarkGray),
    ));

    Line::from(spans)
}
