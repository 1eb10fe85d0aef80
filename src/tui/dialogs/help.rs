//! Help dialog
//!
//! Shows keybindings for the dashboard and the dialogs.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::dashboard::Tab;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

use super::dialog_block;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 24, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(help_lines(app.tab()))
        .block(dialog_block(" Help "))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines for the given tab
fn help_lines(tab: Tab) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab/1-3", "Switch tab"),
        key_line("j/k", "Move selection up/down"),
        key_line("o", "Sign out"),
        Line::from(""),
        heading(tab.title()),
        Line::from(""),
    ];

    match tab {
        Tab::Expenses | Tab::Income => {
            lines.push(key_line("a", "Add entry"));
            lines.push(key_line("e/Enter", "Edit selected entry"));
            lines.push(key_line("d", "Delete selected entry"));
        }
        Tab::Categories => {
            lines.push(key_line("a", "Add category"));
            lines.push(key_line("d", "Delete selected custom category"));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading("Dialogs"));
    lines.push(Line::from(""));
    lines.push(key_line("Tab/↑↓", "Move between fields"));
    lines.push(key_line("←/→", "Cycle category, status or source"));
    lines.push(key_line("Enter", "Save"));
    lines.push(key_line("Esc", "Cancel"));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::White),
    )));

    lines
}

/// Create a key-description line
fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(desc),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_tab_keys() {
        let text: Vec<String> = help_lines(Tab::Categories)
            .iter()
            .map(|line| line.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("Manage Categories")));
        assert!(text.iter().any(|l| l.contains("Delete selected custom category")));
    }
}
