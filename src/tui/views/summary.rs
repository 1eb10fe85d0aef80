//! Summary cards
//!
//! Total income, expected cost, actual cost and the remaining (or over
//! budget) amount, recomputed from the current lists on every frame.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::dashboard::Dashboard;
use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

/// Render the four summary cards
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, layout: &DashboardLayout) {
    let summary = dashboard.summary();
    let symbol = app.settings.currency_symbol.as_str();
    let cards = layout.summary_cards();

    let remaining_color = if summary.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };

    render_card(frame, cards[0], "Total Income", summary.total_income, symbol, Color::Green);
    render_card(frame, cards[1], "Expected Cost", summary.total_expected, symbol, Color::Yellow);
    render_card(frame, cards[2], "Actual Cost", summary.total_actual, symbol, Color::Cyan);
    render_card(
        frame,
        cards[3],
        summary.remaining_label(),
        summary.remaining_magnitude(),
        symbol,
        remaining_color,
    );
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, amount: Money, symbol: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::White))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let value = Paragraph::new(Line::from(Span::styled(
        amount.format_whole(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(value, area);
}
