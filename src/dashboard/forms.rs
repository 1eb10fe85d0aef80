//! Entry forms
//!
//! Forms hold exactly what the user typed. Amounts stay text until submit,
//! when they are parsed into a draft.

use crate::error::{WeddingError, WeddingResult};
use crate::models::money::MAX_AMOUNT_UNITS;
use crate::models::{
    Expense, ExpenseDraft, ExpenseStatus, Income, IncomeDraft, IncomeSource, Money,
    DEFAULT_CATEGORY,
};

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id> FormMode<Id> {
    /// Whether this form edits an existing record
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// A form currently shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenForm<Id, F> {
    pub mode: FormMode<Id>,
    pub fields: F,
}

fn parse_amount(label: &str, input: &str, blank_is_zero: bool) -> WeddingResult<Money> {
    let parsed = if blank_is_zero {
        Money::parse_or_zero(input)
    } else if input.trim().is_empty() {
        return Err(WeddingError::Validation(format!("{} is required", label)));
    } else {
        Money::parse(input)
    };

    let amount = parsed.map_err(|_| {
        WeddingError::Validation(format!("{} must be a number, got '{}'", label, input.trim()))
    })?;

    if amount.exceeds_input_limit() {
        return Err(WeddingError::Validation(format!(
            "{} cannot exceed {}",
            label,
            Money::from_units(MAX_AMOUNT_UNITS).format_whole("$")
        )));
    }

    Ok(amount)
}

/// Text fields of the expense form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub category: String,
    pub description: String,
    pub expected_amount: String,
    pub actual_amount: String,
    pub status: ExpenseStatus,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
            expected_amount: String::new(),
            actual_amount: String::new(),
            status: ExpenseStatus::Expected,
        }
    }
}

impl ExpenseForm {
    /// Pre-populate from a stored expense; a zero actual amount shows as blank
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            category: expense.category.clone(),
            description: expense.description.clone(),
            expected_amount: expense.expected_amount.to_input_string(),
            actual_amount: if expense.actual_amount.is_zero() {
                String::new()
            } else {
                expense.actual_amount.to_input_string()
            },
            status: expense.status,
        }
    }

    /// Parse and validate the typed values
    pub fn to_draft(&self) -> WeddingResult<ExpenseDraft> {
        let draft = ExpenseDraft {
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            expected_amount: parse_amount("Expected amount", &self.expected_amount, false)?,
            actual_amount: parse_amount("Actual amount", &self.actual_amount, true)?,
            status: self.status,
        };
        draft
            .validate()
            .map_err(|e| WeddingError::Validation(e.to_string()))?;
        Ok(draft)
    }
}

/// Text fields of the income form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncomeForm {
    pub source: IncomeSource,
    pub description: String,
    pub amount: String,
}

impl IncomeForm {
    /// Pre-populate from a stored income entry
    pub fn from_income(income: &Income) -> Self {
        Self {
            source: income.source,
            description: income.description.clone(),
            amount: income.amount.to_input_string(),
        }
    }

    /// Parse and validate the typed values
    pub fn to_draft(&self) -> WeddingResult<IncomeDraft> {
        let draft = IncomeDraft {
            source: self.source,
            description: self.description.trim().to_string(),
            amount: parse_amount("Amount", &self.amount, false)?,
        };
        draft
            .validate()
            .map_err(|e| WeddingError::Validation(e.to_string()))?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, IncomeId};
    use chrono::Utc;

    #[test]
    fn test_expense_form_defaults() {
        let form = ExpenseForm::default();
        assert_eq!(form.category, "Venue");
        assert_eq!(form.status, ExpenseStatus::Expected);
        assert!(form.expected_amount.is_empty());
        assert!(form.actual_amount.is_empty());
    }

    #[test]
    fn test_blank_actual_is_zero() {
        let form = ExpenseForm {
            description: "Hall".into(),
            expected_amount: "500".into(),
            ..ExpenseForm::default()
        };
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.expected_amount, Money::from_units(500));
        assert_eq!(draft.actual_amount, Money::zero());
        assert_eq!(draft.status, ExpenseStatus::Expected);
    }

    #[test]
    fn test_bad_amounts_rejected() {
        let base = ExpenseForm {
            description: "Hall".into(),
            ..ExpenseForm::default()
        };

        let blank = base.clone();
        assert!(blank.to_draft().unwrap_err().is_validation());

        let text = ExpenseForm {
            expected_amount: "lots".into(),
            ..base.clone()
        };
        assert!(text.to_draft().unwrap_err().is_validation());

        let negative = ExpenseForm {
            expected_amount: "100".into(),
            actual_amount: "-5".into(),
            ..base
        };
        assert!(negative.to_draft().unwrap_err().is_validation());
    }

    #[test]
    fn test_huge_amounts_rejected() {
        let form = ExpenseForm {
            description: "Hall".into(),
            expected_amount: "79228162514264337593543950335".into(),
            ..ExpenseForm::default()
        };
        let err = form.to_draft().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("cannot exceed"));

        let income = IncomeForm {
            description: "Lottery".into(),
            amount: "1000000000001".into(),
            ..IncomeForm::default()
        };
        assert!(income.to_draft().unwrap_err().is_validation());

        let at_limit = IncomeForm {
            description: "Lottery".into(),
            amount: "1,000,000,000,000".into(),
            ..IncomeForm::default()
        };
        assert!(at_limit.to_draft().is_ok());
    }

    #[test]
    fn test_from_expense_blanks_zero_actual() {
        let now = Utc::now();
        let expense = Expense {
            id: ExpenseId::new(),
            category: "Flowers".into(),
            description: "Bouquets".into(),
            expected_amount: Money::from_cents(120050),
            actual_amount: Money::zero(),
            status: ExpenseStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let form = ExpenseForm::from_expense(&expense);
        assert_eq!(form.expected_amount, "1200.5");
        assert_eq!(form.actual_amount, "");
        assert_eq!(form.status, ExpenseStatus::Pending);
        assert_eq!(form.to_draft().unwrap(), expense.to_draft());
    }

    #[test]
    fn test_income_form() {
        let form = IncomeForm::default();
        assert_eq!(form.source, IncomeSource::Savings);

        let form = IncomeForm {
            source: IncomeSource::Salary,
            description: "Bonus".into(),
            amount: "10,000".into(),
        };
        assert_eq!(form.to_draft().unwrap().amount, Money::from_units(10000));

        let now = Utc::now();
        let income = Income {
            id: IncomeId::new(),
            source: IncomeSource::Loan,
            description: "Bank".into(),
            amount: Money::from_units(3000),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(IncomeForm::from_income(&income).amount, "3000");
    }
}
