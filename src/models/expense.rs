//! Expense model
//!
//! An expense line has a planned (expected) cost and the amount actually
//! paid so far, tagged with a category name and a payment status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Payment status of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Planned, nothing arranged yet
    #[default]
    Expected,
    /// Booked or invoiced, not fully paid
    Pending,
    /// Paid
    Paid,
}

impl ExpenseStatus {
    /// All statuses in display order
    pub fn all() -> &'static [Self] {
        &[Self::Expected, Self::Pending, Self::Paid]
    }

    /// Stored name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expected => "expected",
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    /// Next status in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Expected => Self::Pending,
            Self::Pending => Self::Paid,
            Self::Paid => Self::Expected,
        }
    }

    /// Previous status in display order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Expected => Self::Paid,
            Self::Pending => Self::Expected,
            Self::Paid => Self::Pending,
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExpenseStatus {
    type Err = ExpenseValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expected" => Ok(Self::Expected),
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(ExpenseValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    EmptyCategory,
    NegativeExpectedAmount,
    NegativeActualAmount,
    UnknownStatus(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::NegativeExpectedAmount => write!(f, "Expected amount cannot be negative"),
            Self::NegativeActualAmount => write!(f, "Actual amount cannot be negative"),
            Self::UnknownStatus(s) => {
                write!(f, "Unknown status '{}' (use expected, pending or paid)", s)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A stored expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: String,
    pub description: String,
    pub expected_amount: Money,
    pub actual_amount: Money,
    pub status: ExpenseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// The user-editable part of this expense
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            category: self.category.clone(),
            description: self.description.clone(),
            expected_amount: self.expected_amount,
            actual_amount: self.actual_amount,
            status: self.status,
        }
    }

    /// How much of the planned cost is still unpaid (never negative)
    pub fn outstanding(&self) -> Money {
        let diff = self.expected_amount - self.actual_amount;
        if diff.is_negative() {
            Money::zero()
        } else {
            diff
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// The user-editable fields of an expense, as submitted from a form
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub category: String,
    pub description: String,
    pub expected_amount: Money,
    pub actual_amount: Money,
    pub status: ExpenseStatus,
}

impl ExpenseDraft {
    /// Validate the draft before it is written
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.expected_amount.is_negative() {
            return Err(ExpenseValidationError::NegativeExpectedAmount);
        }

        if self.actual_amount.is_negative() {
            return Err(ExpenseValidationError::NegativeActualAmount);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            category: "Venue".into(),
            description: "Reception hall".into(),
            expected_amount: Money::from_units(5000),
            actual_amount: Money::zero(),
            status: ExpenseStatus::Expected,
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let mut d = draft();
        d.description = "   ".into();
        assert_eq!(d.validate(), Err(ExpenseValidationError::EmptyDescription));

        let mut d = draft();
        d.category = String::new();
        assert_eq!(d.validate(), Err(ExpenseValidationError::EmptyCategory));

        let mut d = draft();
        d.expected_amount = Money::from_units(-1);
        assert_eq!(d.validate(), Err(ExpenseValidationError::NegativeExpectedAmount));

        let mut d = draft();
        d.actual_amount = Money::from_units(-1);
        assert_eq!(d.validate(), Err(ExpenseValidationError::NegativeActualAmount));
    }

    #[test]
    fn test_status_parse_and_cycle() {
        assert_eq!("Paid".parse::<ExpenseStatus>().unwrap(), ExpenseStatus::Paid);
        assert!("done".parse::<ExpenseStatus>().is_err());
        assert_eq!(ExpenseStatus::Paid.next(), ExpenseStatus::Expected);
        assert_eq!(ExpenseStatus::Expected.prev(), ExpenseStatus::Paid);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ExpenseStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn test_outstanding() {
        let now = Utc::now();
        let mut expense = Expense {
            id: ExpenseId::new(),
            category: "Catering".into(),
            description: "Dinner".into(),
            expected_amount: Money::from_units(3000),
            actual_amount: Money::from_units(1000),
            status: ExpenseStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(expense.outstanding(), Money::from_units(2000));

        expense.actual_amount = Money::from_units(3500);
        assert_eq!(expense.outstanding(), Money::zero());
    }
}
