//! Income tab

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::dashboard::Dashboard;
use crate::tui::app::App;

/// Render the income table
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .title(" Income ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let income = dashboard.income();
    if income.is_empty() {
        let text = Paragraph::new("No income yet. Press 'a' to add some.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let widths = [
        Constraint::Length(12), // Source
        Constraint::Min(20),    // Description
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Source").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = income
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.source.name()),
                Cell::from(entry.description.clone()),
                Cell::from(entry.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_income_index));

    frame.render_stateful_widget(table, area, &mut state);
}
