//! Expenses tab

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::dashboard::Dashboard;
use crate::models::ExpenseStatus;
use crate::tui::app::App;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let expenses = dashboard.expenses();
    if expenses.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();

    let widths = [
        Constraint::Length(16), // Category
        Constraint::Min(20),    // Description
        Constraint::Length(14), // Expected
        Constraint::Length(14), // Actual
        Constraint::Length(10), // Status
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Category").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Expected").style(bold),
        Cell::from("Actual").style(bold),
        Cell::from("Status").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let status_color = match expense.status {
                ExpenseStatus::Expected => Color::White,
                ExpenseStatus::Pending => Color::Yellow,
                ExpenseStatus::Paid => Color::Green,
            };

            Row::new(vec![
                Cell::from(expense.category.clone()),
                Cell::from(expense.description.clone()),
                Cell::from(expense.expected_amount.format_with_symbol(symbol)),
                Cell::from(expense.actual_amount.format_with_symbol(symbol)),
                Cell::from(expense.status.as_str()).style(Style::default().fg(status_color)),
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
    state.select(Some(app.selected_expense_index));

    frame.render_stateful_widget(table, area, &mut state);
}
