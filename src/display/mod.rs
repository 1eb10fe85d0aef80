//! Display formatting for terminal output
//!
//! Plain-text tables and detail views used by the CLI.

pub mod category;
pub mod expense;
pub mod income;
pub mod summary;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_list};
pub use income::{format_income_details, format_income_list};
pub use summary::{format_category_totals, format_summary};
