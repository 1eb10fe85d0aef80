//! Service layer for Wedding Bells
//!
//! Pure computations over the budget lists.

pub mod summary;

pub use summary::{totals_by_category, BudgetSummary, CategoryTotal};
