//! Add category dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input;

use super::{dialog_block, error_line, hints_line, text_field};

/// State of the add-category dialog
#[derive(Debug, Clone, Default)]
pub struct CategoryDialogState {
    pub name: String,
    pub cursor: usize,
    pub error: Option<String>,
}

impl CategoryDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Render the category dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.category_dialog;

    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(dialog_block(" Add Category "), area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(text_field("Name", &state.name, state.cursor, true)),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(error_line(state.error.as_deref())), chunks[2]);
    frame.render_widget(Paragraph::new(hints_line()), chunks[3]);
}

/// Handle key input for the category dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.category_dialog;

    match key.code {
        KeyCode::Esc => {
            state.reset();
            app.active_dialog = Default::default();
        }
        KeyCode::Enter => {
            let Some(dashboard) = app.session.dashboard_mut() else {
                app.active_dialog = Default::default();
                return true;
            };
            match dashboard.add_category(&state.name) {
                Ok(_) => {
                    app.status_message = Some(format!("Added category '{}'", state.name.trim()));
                    state.reset();
                    app.active_dialog = Default::default();
                }
                Err(e) => state.error = Some(e.to_string()),
            }
        }
        KeyCode::Char(c) => input::insert_char(&mut state.name, &mut state.cursor, c),
        KeyCode::Backspace => input::backspace(&mut state.name, &mut state.cursor),
        KeyCode::Delete => input::delete(&mut state.name, state.cursor),
        KeyCode::Left => input::move_left(&mut state.cursor),
        KeyCode::Right => input::move_right(&state.name, &mut state.cursor),
        KeyCode::Home => state.cursor = 0,
        KeyCode::End => state.cursor = input::char_len(&state.name),
        _ => return false,
    }

    true
}
