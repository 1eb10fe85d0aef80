//! Budget summary
//!
//! Totals are recomputed from scratch on every call; nothing is cached.

use crate::models::{Expense, Income, Money};

/// Label of the remaining-amount card
pub const REMAINING_LABEL: &str = "Remaining";

/// Label used once expected costs exceed income
pub const OVER_BUDGET_LABEL: &str = "Over Budget";

/// The four headline totals of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetSummary {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expected expense amounts
    pub total_expected: Money,
    /// Sum of all actual expense amounts
    pub total_actual: Money,
    /// Income minus expected cost; negative means over budget
    pub remaining: Money,
}

impl BudgetSummary {
    /// Compute the totals for the given lists
    pub fn compute(expenses: &[Expense], income: &[Income]) -> Self {
        let total_income: Money = income.iter().map(|i| i.amount).sum();
        let total_expected: Money = expenses.iter().map(|e| e.expected_amount).sum();
        let total_actual: Money = expenses.iter().map(|e| e.actual_amount).sum();

        Self {
            total_income,
            total_expected,
            total_actual,
            remaining: total_income - total_expected,
        }
    }

    /// Whether expected costs exceed income
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// "Remaining" or "Over Budget"
    pub fn remaining_label(&self) -> &'static str {
        if self.is_over_budget() {
            OVER_BUDGET_LABEL
        } else {
            REMAINING_LABEL
        }
    }

    /// Magnitude shown next to the remaining label
    pub fn remaining_magnitude(&self) -> Money {
        self.remaining.abs()
    }
}

/// Expected and actual spend of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub expected: Money,
    pub actual: Money,
    pub count: usize,
}

/// Per-category totals, in order of first appearance
///
/// Groups by the stored category string, so expenses whose custom category
/// was deleted still show up under their old name.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => {
                total.expected += expense.expected_amount;
                total.actual += expense.actual_amount;
                total.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                expected: expense.expected_amount,
                actual: expense.actual_amount,
                count: 1,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseStatus, IncomeId, IncomeSource};
    use chrono::Utc;

    fn expense(category: &str, expected: Money, actual: Money) -> Expense {
        let now = Utc::now();
        Expense {
            id: ExpenseId::new(),
            category: category.into(),
            description: "item".into(),
            expected_amount: expected,
            actual_amount: actual,
            status: ExpenseStatus::Expected,
            created_at: now,
            updated_at: now,
        }
    }

    fn income(amount: Money) -> Income {
        let now = Utc::now();
        Income {
            id: IncomeId::new(),
            source: IncomeSource::Savings,
            description: "fund".into(),
            amount,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_lists_are_zero() {
        let summary = BudgetSummary::compute(&[], &[]);
        assert_eq!(summary, BudgetSummary::default());
        assert_eq!(summary.remaining_label(), "Remaining");
    }

    #[test]
    fn test_totals() {
        let expenses = vec![
            expense("Venue", Money::from_units(5000), Money::from_units(2000)),
            expense("Catering", Money::from_cents(123456), Money::zero()),
        ];
        let incomes = vec![income(Money::from_units(10000)), income(Money::from_units(500))];

        let summary = BudgetSummary::compute(&expenses, &incomes);
        assert_eq!(summary.total_income, Money::from_units(10500));
        assert_eq!(summary.total_expected, Money::from_cents(623456));
        assert_eq!(summary.total_actual, Money::from_units(2000));
        assert_eq!(summary.remaining, Money::from_cents(426544));
        assert!(!summary.is_over_budget());
    }

    #[test]
    fn test_over_budget() {
        let expenses = vec![expense("Venue", Money::from_units(8000), Money::zero())];
        let incomes = vec![income(Money::from_units(5000))];

        let summary = BudgetSummary::compute(&expenses, &incomes);
        assert_eq!(summary.remaining, Money::from_units(-3000));
        assert_eq!(summary.remaining_label(), "Over Budget");
        assert_eq!(summary.remaining_magnitude(), Money::from_units(3000));
    }

    #[test]
    fn test_exactly_zero_is_remaining() {
        let expenses = vec![expense("Venue", Money::from_units(100), Money::zero())];
        let incomes = vec![income(Money::from_units(100))];
        assert_eq!(
            BudgetSummary::compute(&expenses, &incomes).remaining_label(),
            "Remaining"
        );
    }

    #[test]
    fn test_stored_amounts_past_decimal_range_saturate() {
        let max = Money::from(rust_decimal::Decimal::MAX);
        let expenses = vec![
            expense("Venue", max, max),
            expense("Venue", max, Money::zero()),
        ];
        let incomes = vec![income(Money::from_units(100))];

        let summary = BudgetSummary::compute(&expenses, &incomes);
        assert_eq!(summary.total_expected, max);
        assert_eq!(summary.total_actual, max);
        assert!(summary.is_over_budget());
        assert_eq!(summary.remaining_label(), "Over Budget");

        let totals = totals_by_category(&expenses);
        assert_eq!(totals[0].expected, max);
    }

    #[test]
    fn test_adding_and_removing_income() {
        let mut incomes = vec![income(Money::from_units(2000))];
        let before = BudgetSummary::compute(&[], &incomes).total_income;

        incomes.push(income(Money::from_units(10000)));
        let with_bonus = BudgetSummary::compute(&[], &incomes).total_income;
        assert_eq!(with_bonus, before + Money::from_units(10000));

        incomes.pop();
        assert_eq!(BudgetSummary::compute(&[], &incomes).total_income, before);
    }

    #[test]
    fn test_totals_by_category() {
        let expenses = vec![
            expense("Venue", Money::from_units(100), Money::from_units(50)),
            expense("Music", Money::from_units(30), Money::zero()),
            expense("Venue", Money::from_units(20), Money::from_units(20)),
        ];

        let totals = totals_by_category(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Venue");
        assert_eq!(totals[0].expected, Money::from_units(120));
        assert_eq!(totals[0].actual, Money::from_units(70));
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].category, "Music");
    }
}
