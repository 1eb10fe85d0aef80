//! Loading and sign-in screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::tui::app::{App, EntryField, EntryMode};
use crate::tui::dialogs::{dialog_block, error_line};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::{render_input, render_masked};

/// Shown until the auth provider has reported once
pub fn render_loading(frame: &mut Frame) {
    let area = centered_rect_fixed(30, 3, frame.area());
    let text = Paragraph::new("Loading…")
        .alignment(Alignment::Center)
        .block(dialog_block(" Wedding Bells "))
        .style(Style::default().fg(Color::White));
    frame.render_widget(text, area);
}

/// Sign-in / sign-up form
pub fn render(frame: &mut Frame, app: &App) {
    let entry = &app.entry;
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(" Wedding Bells: {} ", entry.mode.title());
    frame.render_widget(dialog_block(&title), area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Email
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Password
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Length(1), // Mode hint
            Constraint::Min(0),
        ])
        .split(inner);

    let email_focused = entry.focused == EntryField::Email;
    let password_focused = entry.focused == EntryField::Password;

    let mut email = vec![Span::styled("Email:     ", label_style(email_focused))];
    email.extend(render_input("", &entry.email, entry.email_cursor, email_focused).spans);
    frame.render_widget(Paragraph::new(Line::from(email)), chunks[0]);

    let mut password = vec![Span::styled("Password:  ", label_style(password_focused))];
    password.extend(
        render_masked(&entry.password, entry.password_cursor, password_focused).spans,
    );
    frame.render_widget(Paragraph::new(Line::from(password)), chunks[2]);

    frame.render_widget(Paragraph::new(error_line(entry.error.as_deref())), chunks[4]);

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(format!(" {}  ", entry.mode.title())),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);

    let toggle = match entry.mode {
        EntryMode::SignIn => "[F2] No account yet? Create one",
        EntryMode::SignUp => "[F2] Already registered? Sign in",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(toggle, Style::default().fg(Color::DarkGray))),
        chunks[6],
    );
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
