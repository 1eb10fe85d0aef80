//! Core data models for Wedding Bells
//!
//! This module contains the data structures of the wedding budget:
//! expenses, income entries, categories and the signed-in user.

pub mod category;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod user;

pub use category::{
    category_choices, category_names, is_builtin, CategoryChoice, CustomCategory,
    BUILTIN_CATEGORIES, DEFAULT_CATEGORY,
};
pub use expense::{Expense, ExpenseDraft, ExpenseStatus};
pub use ids::{CategoryId, ExpenseId, IncomeId, UserId};
pub use income::{Income, IncomeDraft, IncomeSource};
pub use money::Money;
pub use user::User;
