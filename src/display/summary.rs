//! Summary display formatting
//!
//! Totals are shown rounded to whole currency units.

use crate::services::{BudgetSummary, CategoryTotal};

/// Format the four headline totals
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total Income:    {:>14}\n",
        summary.total_income.format_whole(symbol)
    ));
    output.push_str(&format!(
        "Expected Cost:   {:>14}\n",
        summary.total_expected.format_whole(symbol)
    ));
    output.push_str(&format!(
        "Actual Spent:    {:>14}\n",
        summary.total_actual.format_whole(symbol)
    ));
    output.push_str(&format!(
        "{:<17}{:>14}\n",
        format!("{}:", summary.remaining_label()),
        summary.remaining_magnitude().format_whole(symbol)
    ));
    output
}

/// Format expected and actual spend per category
pub fn format_category_totals(totals: &[CategoryTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return String::new();
    }

    let name_width = totals
        .iter()
        .map(|t| t.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>5}  {:>12}  {:>12}\n",
        "Category",
        "Items",
        "Expected",
        "Actual",
        name_width = name_width
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->5}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width
    ));
    for total in totals {
        output.push_str(&format!(
            "{:<name_width$}  {:>5}  {:>12}  {:>12}\n",
            total.category,
            total.count,
            total.expected.format_whole(symbol),
            total.actual.format_whole(symbol),
            name_width = name_width
        ));
    }
    output
}
