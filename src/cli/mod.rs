//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the dashboard.

pub mod auth;
pub mod category;
pub mod expense;
pub mod income;
pub mod summary;

pub use auth::{handle_auth_command, AuthCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use summary::handle_summary_command;

use crate::dashboard::Dashboard;
use crate::error::{WeddingError, WeddingResult};
use crate::session::Session;

/// Bring the session up to date and return the signed-in user's dashboard
pub fn require_dashboard(session: &mut Session) -> WeddingResult<&mut Dashboard> {
    session.sync()?;
    session.dashboard_mut().ok_or(WeddingError::NotSignedIn)
}

/// Map a typed category to its canonical name in the effective list
pub fn resolve_category_name(dashboard: &Dashboard, name: &str) -> WeddingResult<String> {
    let name = name.trim();
    dashboard
        .category_names()
        .into_iter()
        .find(|existing| existing.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            WeddingError::Validation(format!(
                "Unknown category '{}' (see 'wedding category list')",
                name
            ))
        })
}
