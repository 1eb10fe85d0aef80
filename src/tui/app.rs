//! Application state for the TUI
//!
//! The App struct holds the session plus everything that only exists on
//! screen: list selections, dialog focus and cursors, status messages.

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::dashboard::{Dashboard, Tab};
use crate::session::Session;

use super::dialogs::category::CategoryDialogState;
use super::dialogs::expense::ExpenseDialogState;
use super::dialogs::income::IncomeDialogState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Expense,
    Income,
    AddCategory,
    Help,
}

/// Which action the entry screen performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    #[default]
    SignIn,
    SignUp,
}

impl EntryMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }
}

/// Focused field on the entry screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Email,
    Password,
}

/// State of the sign-in / sign-up screen
#[derive(Debug, Default)]
pub struct EntryState {
    pub mode: EntryMode,
    pub focused: EntryField,
    pub email: String,
    pub email_cursor: usize,
    pub password: Zeroizing<String>,
    pub password_cursor: usize,
    pub error: Option<String>,
}

impl EntryState {
    /// Clear everything but the typed email
    pub fn clear_password(&mut self) {
        self.password = Zeroizing::new(String::new());
        self.password_cursor = 0;
    }
}

/// Main application state
pub struct App<'a> {
    /// Auth gate and the signed-in user's dashboard
    pub session: Session,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Sign-in screen state
    pub entry: EntryState,

    /// Selected row per tab
    pub selected_expense_index: usize,
    pub selected_income_index: usize,
    pub selected_category_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Dialog states
    pub expense_dialog: ExpenseDialogState,
    pub income_dialog: IncomeDialogState,
    pub category_dialog: CategoryDialogState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(session: Session, settings: &'a Settings) -> Self {
        Self {
            session,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            entry: EntryState::default(),
            selected_expense_index: 0,
            selected_income_index: 0,
            selected_category_index: 0,
            status_message: None,
            expense_dialog: ExpenseDialogState::default(),
            income_dialog: IncomeDialogState::default(),
            category_dialog: CategoryDialogState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.session.dashboard()
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.session.dashboard_mut()
    }

    /// Currently selected tab (Expenses when signed out)
    pub fn tab(&self) -> Tab {
        self.dashboard().map(Dashboard::tab).unwrap_or_default()
    }

    /// Number of rows in the current tab
    pub fn row_count(&self) -> usize {
        match self.dashboard() {
            Some(dashboard) => match dashboard.tab() {
                Tab::Expenses => dashboard.expenses().len(),
                Tab::Income => dashboard.income().len(),
                Tab::Categories => dashboard.category_choices().len(),
            },
            None => 0,
        }
    }

    fn selected_index_mut(&mut self) -> &mut usize {
        match self.tab() {
            Tab::Expenses => &mut self.selected_expense_index,
            Tab::Income => &mut self.selected_income_index,
            Tab::Categories => &mut self.selected_category_index,
        }
    }

    /// Selected row of the current tab
    pub fn selected_index(&self) -> usize {
        match self.tab() {
            Tab::Expenses => self.selected_expense_index,
            Tab::Income => self.selected_income_index,
            Tab::Categories => self.selected_category_index,
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let count = self.row_count();
        let index = self.selected_index_mut();
        if count > 0 && *index + 1 < count {
            *index += 1;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        let index = self.selected_index_mut();
        *index = index.saturating_sub(1);
    }

    /// Keep every selection inside its list after a snapshot shrank it
    pub fn clamp_selections(&mut self) {
        let (expenses, income, categories) = match self.dashboard() {
            Some(d) => (d.expenses().len(), d.income().len(), d.category_choices().len()),
            None => (0, 0, 0),
        };
        self.selected_expense_index = self.selected_expense_index.min(expenses.saturating_sub(1));
        self.selected_income_index = self.selected_income_index.min(income.saturating_sub(1));
        self.selected_category_index = self
            .selected_category_index
            .min(categories.saturating_sub(1));
    }

    /// Pull auth changes and store snapshots into the view
    pub fn sync(&mut self) {
        match self.session.sync() {
            Ok(true) => self.clamp_selections(),
            Ok(false) => {}
            Err(e) => {
                tracing::error!(error = %e, "Session sync failed");
                self.set_status(format!("Error: {}", e));
            }
        }
    }
}
