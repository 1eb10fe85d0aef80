//! Expense entry dialog
//!
//! Edits the dashboard's open expense form in place. Category and status are
//! selectors cycled with Left/Right; the rest are text fields.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::dashboard::{Dashboard, ExpenseForm};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input;

use super::{dialog_block, error_line, hints_line, selector_field, text_field};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Description,
    Expected,
    Actual,
    Status,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Description,
            Self::Description => Self::Expected,
            Self::Expected => Self::Actual,
            Self::Actual => Self::Status,
            Self::Status => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Status,
            Self::Description => Self::Category,
            Self::Expected => Self::Description,
            Self::Actual => Self::Expected,
            Self::Status => Self::Actual,
        }
    }

    fn is_text(self) -> bool {
        matches!(self, Self::Description | Self::Expected | Self::Actual)
    }
}

/// Focus and cursor of the expense dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseDialogState {
    pub focused: ExpenseField,
    pub cursor: usize,
    pub error: Option<String>,
}

impl ExpenseDialogState {
    /// Reset for a freshly opened form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn focus(&mut self, field: ExpenseField, form: &ExpenseForm) {
        self.focused = field;
        self.cursor = text_of(form, field).map(input::char_len).unwrap_or(0);
    }
}

fn text_of(form: &ExpenseForm, field: ExpenseField) -> Option<&str> {
    match field {
        ExpenseField::Description => Some(&form.description),
        ExpenseField::Expected => Some(&form.expected_amount),
        ExpenseField::Actual => Some(&form.actual_amount),
        _ => None,
    }
}

fn text_of_mut(form: &mut ExpenseForm, field: ExpenseField) -> Option<&mut String> {
    match field {
        ExpenseField::Description => Some(&mut form.description),
        ExpenseField::Expected => Some(&mut form.expected_amount),
        ExpenseField::Actual => Some(&mut form.actual_amount),
        _ => None,
    }
}

/// Step the category selector through the effective category list
fn cycle_category(dashboard: &mut Dashboard, forward: bool) {
    let names = dashboard.category_names();
    if names.is_empty() {
        return;
    }
    let Some(form) = dashboard.expense_form_mut() else {
        return;
    };
    let current = names
        .iter()
        .position(|name| name.eq_ignore_ascii_case(&form.category));
    let next = match (current, forward) {
        (Some(i), true) => (i + 1) % names.len(),
        (Some(i), false) => (i + names.len() - 1) % names.len(),
        (None, _) => 0,
    };
    form.category = names[next].clone();
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let Some(open) = app.dashboard().and_then(Dashboard::expense_form) else {
        return;
    };
    let state = &app.expense_dialog;
    let form = &open.fields;

    let area = centered_rect_fixed(60, 12, frame.area());
    frame.render_widget(Clear, area);

    let title = if open.mode.is_edit() {
        " Edit Expense "
    } else {
        " Add Expense "
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
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Expected
            Constraint::Length(1), // Actual
            Constraint::Length(1), // Status
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let focused = state.focused;
    let lines: [Line; 5] = [
        selector_field("Category", &form.category, focused == ExpenseField::Category),
        text_field(
            "Description",
            &form.description,
            state.cursor,
            focused == ExpenseField::Description,
        ),
        text_field(
            "Expected",
            &form.expected_amount,
            state.cursor,
            focused == ExpenseField::Expected,
        ),
        text_field(
            "Actual",
            &form.actual_amount,
            state.cursor,
            focused == ExpenseField::Actual,
        ),
        selector_field("Status", form.status.as_str(), focused == ExpenseField::Status),
    ];
    for (line, chunk) in lines.into_iter().zip(chunks.iter()) {
        frame.render_widget(Paragraph::new(line), *chunk);
    }

    frame.render_widget(Paragraph::new(error_line(state.error.as_deref())), chunks[6]);
    frame.render_widget(Paragraph::new(hints_line()), chunks[7]);
}

/// Handle key input for the expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.expense_dialog;
    let Some(dashboard) = app.session.dashboard_mut() else {
        app.active_dialog = Default::default();
        return true;
    };

    match key.code {
        KeyCode::Esc => {
            dashboard.cancel_expense_form();
            state.reset();
            app.active_dialog = Default::default();
        }

        KeyCode::Enter => match dashboard.submit_expense_form() {
            Ok(id) => {
                state.reset();
                app.active_dialog = Default::default();
                app.status_message = Some(format!("Saved expense {}", id));
            }
            Err(e) => state.error = Some(e.to_string()),
        },

        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = dashboard.expense_form_mut() {
                state.focus(state.focused.next(), form);
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = dashboard.expense_form_mut() {
                state.focus(state.focused.prev(), form);
            }
        }

        KeyCode::Left | KeyCode::Right if !state.focused.is_text() => {
            let forward = key.code == KeyCode::Right;
            match state.focused {
                ExpenseField::Category => cycle_category(dashboard, forward),
                ExpenseField::Status => {
                    if let Some(form) = dashboard.expense_form_mut() {
                        form.status = if forward {
                            form.status.next()
                        } else {
                            form.status.prev()
                        };
                    }
                }
                _ => {}
            }
        }

        code => {
            let focused = state.focused;
            let Some(value) = dashboard
                .expense_form_mut()
                .and_then(|form| text_of_mut(form, focused))
            else {
                return false;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_wraps() {
        let mut field = ExpenseField::default();
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, ExpenseField::Category);
        assert_eq!(ExpenseField::Category.prev(), ExpenseField::Status);
    }

    #[test]
    fn test_focus_moves_cursor_to_end() {
        let form = ExpenseForm {
            description: "Band".into(),
            ..ExpenseForm::default()
        };
        let mut state = ExpenseDialogState::default();
        state.focus(ExpenseField::Description, &form);
        assert_eq!(state.cursor, 4);
        state.focus(ExpenseField::Status, &form);
        assert_eq!(state.cursor, 0);
    }
}
