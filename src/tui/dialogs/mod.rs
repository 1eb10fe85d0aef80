//! Dialog modules for the TUI
//!
//! Modal dialogs for expense and income entry, adding categories and help.

pub mod category;
pub mod expense;
pub mod help;
pub mod income;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::widgets::input::render_input;

/// Bordered dialog frame with a cyan title
pub(crate) fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

/// Labelled text field
pub(crate) fn text_field(label: &str, value: &str, cursor: usize, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("{:<13}", format!("{}:", label)), label_style(focused))];
    spans.extend(render_input("", value, cursor, focused).spans);
    Line::from(spans)
}

/// Labelled selector cycled with Left/Right
pub(crate) fn selector_field(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let hint = if focused { " ◀ ▶" } else { "" };

    Line::from(vec![
        Span::styled(format!("{:<13}", format!("{}:", label)), label_style(focused)),
        Span::styled(format!(" {} ", value), value_style),
        Span::styled(hint, Style::default().fg(Color::Yellow)),
    ])
}

/// Error line shown under the fields
pub(crate) fn error_line(error: Option<&str>) -> Line<'static> {
    match error {
        Some(error) => Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    }
}

/// Save / cancel hints
pub(crate) fn hints_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ])
}
