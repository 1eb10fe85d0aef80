//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::display::{format_income_details, format_income_list};
use crate::error::{WeddingError, WeddingResult};
use crate::models::IncomeSource;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// List all income entries
    List,

    /// Show income entry details
    Show {
        /// Income ID (full, display form or unique prefix)
        income: String,
    },

    /// Add an income entry
    Add {
        /// Description
        description: String,
        /// Amount
        amount: String,
        /// Source: Savings, "Gift from Parents", Loan, "Investment Returns", Salary, Other
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Edit an income entry
    Edit {
        /// Income ID (full, display form or unique prefix)
        income: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New source
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Delete an income entry
    Delete {
        /// Income ID (full, display form or unique prefix)
        income: String,
    },
}

fn parse_source(source: &str) -> WeddingResult<IncomeSource> {
    source
        .parse()
        .map_err(|e: crate::models::income::IncomeValidationError| {
            WeddingError::Validation(e.to_string())
        })
}

/// Handle an income command
pub fn handle_income_command(
    dashboard: &mut Dashboard,
    settings: &Settings,
    cmd: IncomeCommands,
) -> WeddingResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::List => {
            print!("{}", format_income_list(dashboard.income(), symbol));
        }

        IncomeCommands::Show { income } => {
            let income = dashboard.find_income(&income)?;
            print!(
                "{}",
                format_income_details(income, symbol, &settings.date_format)
            );
        }

        IncomeCommands::Add {
            description,
            amount,
            source,
        } => {
            let source = source.map(|s| parse_source(&s)).transpose()?;

            dashboard.open_income_form();
            if let Some(form) = dashboard.income_form_mut() {
                form.description = description;
                form.amount = amount;
                if let Some(source) = source {
                    form.source = source;
                }
            }

            let id = dashboard.submit_income_form()?;
            println!("Added income {}", id);
        }

        IncomeCommands::Edit {
            income,
            description,
            amount,
            source,
        } => {
            let id = dashboard.find_income(&income)?.id;
            let source = source.map(|s| parse_source(&s)).transpose()?;

            if description.is_none() && amount.is_none() && source.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            dashboard.edit_income(id)?;
            if let Some(form) = dashboard.income_form_mut() {
                if let Some(description) = description {
                    form.description = description;
                }
                if let Some(amount) = amount {
                    form.amount = amount;
                }
                if let Some(source) = source {
                    form.source = source;
                }
            }

            dashboard.submit_income_form()?;
            println!("Updated income {}", id);
        }

        IncomeCommands::Delete { income } => {
            let entry = dashboard.find_income(&income)?;
            let (id, description) = (entry.id, entry.description.clone());
            dashboard.delete_income(id)?;
            println!("Deleted income {} ({})", id, description);
        }
    }

    Ok(())
}
