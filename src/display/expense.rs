//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use crate::models::Expense;

/// Format expenses as a table, in store order
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\n\nAdd one with 'wedding expense add'.".to_string();
    }

    let category_width = expenses
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let description_width = expenses
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, 40);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<category_width$}  {:<description_width$}  {:>12}  {:>12}  {}\n",
        "ID",
        "Category",
        "Description",
        "Expected",
        "Actual",
        "Status",
        category_width = category_width,
        description_width = description_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<category_width$}  {:-<description_width$}  {:->12}  {:->12}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
        description_width = description_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<category_width$}  {:<description_width$}  {:>12}  {:>12}  {}\n",
            expense.id.to_string(),
            expense.category,
            truncate(&expense.description, description_width),
            expense.expected_amount.format_with_symbol(symbol),
            expense.actual_amount.format_with_symbol(symbol),
            expense.status,
            category_width = category_width,
            description_width = description_width,
        ));
    }

    output
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.description));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!(
        "  Expected: {}\n",
        expense.expected_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Actual:   {}\n",
        expense.actual_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Status:   {}\n", expense.status));

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        expense.created_at.format(date_format)
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        expense.updated_at.format(date_format)
    ));

    output
}

pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
