//! Event handler for the TUI
//!
//! Routes keyboard events to the entry screen, the open dialog or the
//! dashboard depending on the current screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroizing;

use crate::dashboard::Tab;
use crate::models::CategoryChoice;
use crate::session::Screen;

use super::app::{ActiveDialog, App, EntryField, EntryMode};
use super::dialogs;
use super::event::Event;
use super::widgets::input;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.sync();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.session.screen() {
        Screen::Loading => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                app.quit();
            }
            Ok(())
        }
        Screen::Entry => {
            handle_entry_key(app, key);
            Ok(())
        }
        Screen::Dashboard => {
            if app.has_dialog() {
                handle_dialog_key(app, key);
                Ok(())
            } else {
                handle_dashboard_key(app, key)
            }
        }
    }
}

/// Keys on the sign-in / sign-up screen
fn handle_entry_key(app: &mut App, key: KeyEvent) {
    let entry = &mut app.entry;

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::F(2) => {
            entry.mode = entry.mode.toggle();
            entry.error = None;
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            entry.mode = entry.mode.toggle();
            entry.error = None;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            entry.focused = match entry.focused {
                EntryField::Email => EntryField::Password,
                EntryField::Password => EntryField::Email,
            };
        }
        KeyCode::Enter => submit_entry(app),
        code => match entry.focused {
            EntryField::Email => edit_text(&mut entry.email, &mut entry.email_cursor, code),
            EntryField::Password => {
                edit_text(&mut entry.password, &mut entry.password_cursor, code)
            }
        },
    }
}

/// Apply a text-editing key to a value
fn edit_text(value: &mut String, cursor: &mut usize, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input::insert_char(value, cursor, c),
        KeyCode::Backspace => input::backspace(value, cursor),
        KeyCode::Delete => input::delete(value, *cursor),
        KeyCode::Left => input::move_left(cursor),
        KeyCode::Right => input::move_right(value, cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = input::char_len(value),
        _ => {}
    }
}

fn submit_entry(app: &mut App) {
    let email = app.entry.email.trim().to_string();
    let password = Zeroizing::new(app.entry.password.as_str().to_owned());

    let result = match app.entry.mode {
        EntryMode::SignIn => app.session.sign_in(&email, &password),
        EntryMode::SignUp => app.session.sign_up(&email, &password),
    };

    match result {
        Ok(user) => {
            tracing::info!(email = %user.email, "Signed in");
            app.entry.error = None;
            app.entry.clear_password();
            app.selected_expense_index = 0;
            app.selected_income_index = 0;
            app.selected_category_index = 0;
            app.set_status(format!("Signed in as {}", user.email));
        }
        Err(e) => {
            app.entry.error = Some(e.to_string());
            app.entry.clear_password();
        }
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Expense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::Income => {
            dialogs::income::handle_key(app, key);
        }
        ActiveDialog::AddCategory => {
            dialogs::category::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys on the dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let tab = app.tab();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Tab => switch_tab(app, tab.next()),
        KeyCode::BackTab => switch_tab(app, tab.prev()),
        KeyCode::Char('1') => switch_tab(app, Tab::Expenses),
        KeyCode::Char('2') => switch_tab(app, Tab::Income),
        KeyCode::Char('3') => switch_tab(app, Tab::Categories),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('a') => open_add(app, tab),
        KeyCode::Char('e') | KeyCode::Enter => open_edit(app, tab),
        KeyCode::Char('d') => delete_selected(app, tab),

        KeyCode::Char('o') => {
            app.session.sign_out()?;
            app.close_dialog();
            app.set_status("Signed out");
        }

        _ => {}
    }

    Ok(())
}

fn switch_tab(app: &mut App, tab: Tab) {
    if let Some(dashboard) = app.dashboard_mut() {
        dashboard.set_tab(tab);
    }
}

fn open_add(app: &mut App, tab: Tab) {
    let Some(dashboard) = app.session.dashboard_mut() else {
        return;
    };

    match tab {
        Tab::Expenses => {
            dashboard.open_expense_form();
            app.expense_dialog.reset();
            app.open_dialog(ActiveDialog::Expense);
        }
        Tab::Income => {
            dashboard.open_income_form();
            app.income_dialog.reset();
            app.open_dialog(ActiveDialog::Income);
        }
        Tab::Categories => {
            app.category_dialog.reset();
            app.open_dialog(ActiveDialog::AddCategory);
        }
    }
}

fn open_edit(app: &mut App, tab: Tab) {
    let Some(dashboard) = app.session.dashboard_mut() else {
        return;
    };

    let result = match tab {
        Tab::Expenses => match dashboard.expenses().get(app.selected_expense_index) {
            Some(expense) => {
                let id = expense.id;
                dashboard.edit_expense(id).map(|()| {
                    app.expense_dialog.reset();
                    app.active_dialog = ActiveDialog::Expense;
                })
            }
            None => Ok(()),
        },
        Tab::Income => match dashboard.income().get(app.selected_income_index) {
            Some(income) => {
                let id = income.id;
                dashboard.edit_income(id).map(|()| {
                    app.income_dialog.reset();
                    app.active_dialog = ActiveDialog::Income;
                })
            }
            None => Ok(()),
        },
        Tab::Categories => Ok(()),
    };

    if let Err(e) = result {
        app.set_status(format!("Error: {}", e));
    }
}

fn delete_selected(app: &mut App, tab: Tab) {
    let Some(dashboard) = app.session.dashboard_mut() else {
        return;
    };

    let result = match tab {
        Tab::Expenses => match dashboard.expenses().get(app.selected_expense_index) {
            Some(expense) => {
                let (id, description) = (expense.id, expense.description.clone());
                dashboard
                    .delete_expense(id)
                    .map(|()| Some(format!("Deleted expense '{}'", description)))
            }
            None => Ok(None),
        },
        Tab::Income => match dashboard.income().get(app.selected_income_index) {
            Some(income) => {
                let (id, description) = (income.id, income.description.clone());
                dashboard
                    .delete_income(id)
                    .map(|()| Some(format!("Deleted income '{}'", description)))
            }
            None => Ok(None),
        },
        Tab::Categories => {
            let selected = dashboard
                .category_choices()
                .get(app.selected_category_index)
                .map(|choice| match choice {
                    CategoryChoice::Builtin(name) => (name.to_string(), false),
                    CategoryChoice::Custom(category) => (category.name.clone(), true),
                });
            match selected {
                Some((name, true)) => dashboard
                    .delete_category(&name)
                    .map(|()| Some(format!("Deleted category '{}'", name))),
                Some((name, false)) => Ok(Some(format!(
                    "'{}' is a built-in category and cannot be deleted",
                    name
                ))),
                None => Ok(None),
            }
        }
    };

    match result {
        Ok(Some(message)) => app.set_status(message),
        Ok(None) => {}
        Err(e) => app.set_status(format!("Error: {}", e)),
    }
}
