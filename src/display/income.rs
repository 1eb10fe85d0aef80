//! Income display formatting

use crate::models::Income;

use super::expense::truncate;

/// Format income entries as a table, in store order
pub fn format_income_list(income: &[Income], symbol: &str) -> String {
    if income.is_empty() {
        return "No income recorded yet.\n\nAdd some with 'wedding income add'.".to_string();
    }

    let description_width = income
        .iter()
        .map(|i| i.description.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, 40);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<18}  {:<description_width$}  {:>12}\n",
        "ID",
        "Source",
        "Description",
        "Amount",
        description_width = description_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<18}  {:-<description_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        description_width = description_width,
    ));

    for entry in income {
        output.push_str(&format!(
            "{:<12}  {:<18}  {:<description_width$}  {:>12}\n",
            entry.id.to_string(),
            entry.source.name(),
            truncate(&entry.description, description_width),
            entry.amount.format_with_symbol(symbol),
            description_width = description_width,
        ));
    }

    output
}

/// Format a single income entry
pub fn format_income_details(income: &Income, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Income: {}\n", income.description));
    output.push_str(&format!("  ID:       {}\n", income.id));
    output.push_str(&format!("  Source:   {}\n", income.source));
    output.push_str(&format!(
        "  Amount:   {}\n",
        income.amount.format_with_symbol(symbol)
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        income.created_at.format(date_format)
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        income.updated_at.format(date_format)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeId, IncomeSource, Money};
    use chrono::Utc;

    #[test]
    fn test_list() {
        let now = Utc::now();
        let entry = Income {
            id: IncomeId::new(),
            source: IncomeSource::GiftFromParents,
            description: "Wedding gift".into(),
            amount: Money::from_units(5000),
            created_at: now,
            updated_at: now,
        };

        let output = format_income_list(&[entry], "$");
        assert!(output.contains("Gift from Parents"));
        assert!(output.contains("$5000.00"));
        assert!(format_income_list(&[], "$").contains("No income"));
    }
}
