//! Income entry dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::dashboard::{Dashboard, IncomeForm};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input;

use super::{dialog_block, error_line, hints_line, selector_field, text_field};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncomeField {
    #[default]
    Source,
    Description,
    Amount,
}

impl IncomeField {
    pub fn next(self) -> Self {
        match self {
            Self::Source => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Source,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Source => Self::Amount,
            Self::Description => Self::Source,
            Self::Amount => Self::Description,
        }
    }
}

/// Focus and cursor of the income dialog
#[derive(Debug, Clone, Default)]
pub struct IncomeDialogState {
    pub focused: IncomeField,
    pub cursor: usize,
    pub error: Option<String>,
}

impl IncomeDialogState {
    /// Reset for a freshly opened form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn focus(&mut self, field: IncomeField, form: &IncomeForm) {
        self.focused = field;
        self.cursor = match field {
            IncomeField::Source => 0,
            IncomeField::Description => input::char_len(&form.description),
            IncomeField::Amount => input::char_len(&form.amount),
        };
    }
}

/// Render the income dialog
pub fn render(frame: &mut Frame, app: &App) {
    let Some(open) = app.dashboard().and_then(Dashboard::income_form) else {
        return;
    };
    let state = &app.income_dialog;
    let form = &open.fields;

    let area = centered_rect_fixed(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let title = if open.mode.is_edit() {
        " Edit Income "
    } else {
        " Add Income "
    };
    frame.render_widget(dialog_block(title), area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Source
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let focused = state.focused;
    frame.render_widget(
        Paragraph::new(selector_field(
            "Source",
            form.source.name(),
            focused == IncomeField::Source,
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(text_field(
            "Description",
            &form.description,
            state.cursor,
            focused == IncomeField::Description,
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(text_field(
            "Amount",
            &form.amount,
            state.cursor,
            focused == IncomeField::Amount,
        )),
        chunks[2],
    );

    frame.render_widget(Paragraph::new(error_line(state.error.as_deref())), chunks[4]);
    frame.render_widget(Paragraph::new(hints_line()), chunks[5]);
}

/// Handle key input for the income dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.income_dialog;
    let Some(dashboard) = app.session.dashboard_mut() else {
        app.active_dialog = Default::default();
        return true;
    };

    match key.code {
        KeyCode::Esc => {
            dashboard.cancel_income_form();
            state.reset();
            app.active_dialog = Default::default();
        }

        KeyCode::Enter => match dashboard.submit_income_form() {
            Ok(id) => {
                state.reset();
                app.active_dialog = Default::default();
                app.status_message = Some(format!("Saved income {}", id));
            }
            Err(e) => state.error = Some(e.to_string()),
        },

        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = dashboard.income_form_mut() {
                state.focus(state.focused.next(), form);
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = dashboard.income_form_mut() {
                state.focus(state.focused.prev(), form);
            }
        }

        code => {
            let Some(form) = dashboard.income_form_mut() else {
                return false;
            };
            let value = match state.focused {
                IncomeField::Source => {
                    match code {
                        KeyCode::Right => form.source = form.source.next(),
                        KeyCode::Left => form.source = form.source.prev(),
                        _ => return false,
                    }
                    return true;
                }
                IncomeField::Description => &mut form.description,
                IncomeField::Amount => &mut form.amount,
            };
            match code {
                KeyCode::Char(c) => input::insert_char(value, &mut state.cursor, c),
                KeyCode::Backspace => input::backspace(value, &mut state.cursor),
                KeyCode::Delete => input::delete(value, state.cursor),
                KeyCode::Left => input::move_left(&mut state.cursor),
                KeyCode::Right => input::move_right(value, &mut state.cursor),
                KeyCode::Home => state.cursor = 0,
                KeyCode::End => state.cursor = input::char_len(value),
                _ => return false,
            }
        }
    }

    true
}
