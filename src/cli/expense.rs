//! Expense CLI commands
//!
//! Every change goes through the dashboard's expense form, so the CLI gets
//! the same defaults, parsing and validation as the TUI.

use clap::Subcommand;

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{WeddingError, WeddingResult};
use crate::models::ExpenseStatus;

use super::resolve_category_name;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List all expenses
    List,

    /// Show expense details
    Show {
        /// Expense ID (full, display form or unique prefix)
        expense: String,
    },

    /// Add an expense
    Add {
        /// What the expense is for
        description: String,
        /// Expected (planned) cost
        #[arg(short, long)]
        expected: String,
        /// Amount actually paid so far (blank means 0)
        #[arg(short, long)]
        actual: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Status: expected, pending or paid
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (full, display form or unique prefix)
        expense: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New expected cost
        #[arg(short, long)]
        expected: Option<String>,
        /// New actual amount (empty string means 0)
        #[arg(short, long)]
        actual: Option<String>,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New status: expected, pending or paid
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (full, display form or unique prefix)
        expense: String,
    },
}

fn parse_status(status: &str) -> WeddingResult<ExpenseStatus> {
    status
        .parse()
        .map_err(|e: crate::models::expense::ExpenseValidationError| {
            WeddingError::Validation(e.to_string())
        })
}

/// Handle an expense command
pub fn handle_expense_command(
    dashboard: &mut Dashboard,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> WeddingResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::List => {
            print!("{}", format_expense_list(dashboard.expenses(), symbol));
        }

        ExpenseCommands::Show { expense } => {
            let expense = dashboard.find_expense(&expense)?;
            print!(
                "{}",
                format_expense_details(expense, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Add {
            description,
            expected,
            actual,
            category,
            status,
        } => {
            let category = category
                .map(|name| resolve_category_name(dashboard, &name))
                .transpose()?;
            let status = status.map(|s| parse_status(&s)).transpose()?;

            dashboard.open_expense_form();
            if let Some(form) = dashboard.expense_form_mut() {
                form.description = description;
                form.expected_amount = expected;
                if let Some(actual) = actual {
                    form.actual_amount = actual;
                }
                if let Some(category) = category {
                    form.category = category;
                }
                if let Some(status) = status {
                    form.status = status;
                }
            }

            let id = dashboard.submit_expense_form()?;
            println!("Added expense {}", id);
        }

        ExpenseCommands::Edit {
            expense,
            description,
            expected,
            actual,
            category,
            status,
        } => {
            let id = dashboard.find_expense(&expense)?.id;
            let category = category
                .map(|name| resolve_category_name(dashboard, &name))
                .transpose()?;
            let status = status.map(|s| parse_status(&s)).transpose()?;

            if description.is_none()
                && expected.is_none()
                && actual.is_none()
                && category.is_none()
                && status.is_none()
            {
                println!("No changes specified.");
                return Ok(());
            }

            dashboard.edit_expense(id)?;
            if let Some(form) = dashboard.expense_form_mut() {
                if let Some(description) = description {
                    form.description = description;
                }
                if let Some(expected) = expected {
                    form.expected_amount = expected;
                }
                if let Some(actual) = actual {
                    form.actual_amount = actual;
                }
                if let Some(category) = category {
                    form.category = category;
                }
                if let Some(status) = status {
                    form.status = status;
                }
            }

            dashboard.submit_expense_form()?;
            println!("Updated expense {}", id);
        }

        ExpenseCommands::Delete { expense } => {
            let expense = dashboard.find_expense(&expense)?;
            let (id, description) = (expense.id, expense.description.clone());
            dashboard.delete_expense(id)?;
            println!("Deleted expense {} ({})", id, description);
        }
    }

    Ok(())
}
