//! Manage Categories tab
//!
//! Built-ins are listed first and cannot be deleted; custom categories
//! follow in store order.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::dashboard::Dashboard;
use crate::models::CategoryChoice;
use crate::tui::app::App;

/// Render the category list
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .title(" Manage Categories ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = dashboard
        .category_choices()
        .iter()
        .map(|choice| {
            let tag = match choice {
                CategoryChoice::Builtin(_) => Span::styled(" built-in", Style::default().fg(Color::DarkGray)),
                CategoryChoice::Custom(_) => Span::styled(" custom", Style::default().fg(Color::Green)),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", choice.name()), Style::default().fg(Color::White)),
                tag,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_category_index));

    frame.render_stateful_widget(list, area, &mut state);
}
