//! Summary CLI command

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::display::{format_category_totals, format_summary};
use crate::error::WeddingResult;
use crate::services::totals_by_category;

/// Print the budget totals, optionally broken down by category
pub fn handle_summary_command(
    dashboard: &Dashboard,
    settings: &Settings,
    by_category: bool,
) -> WeddingResult<()> {
    let symbol = settings.currency_symbol.as_str();
    print!("{}", format_summary(&dashboard.summary(), symbol));

    if by_category {
        let totals = totals_by_category(dashboard.expenses());
        if !totals.is_empty() {
            println!();
            print!("{}", format_category_totals(&totals, symbol));
        }
    }

    Ok(())
}
