//! Income model
//!
//! Money coming into the wedding fund, tagged with one of a fixed set of
//! sources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;
use super::money::Money;

/// Where an income entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IncomeSource {
    #[default]
    Savings,
    #[serde(rename = "Gift from Parents")]
    GiftFromParents,
    Loan,
    #[serde(rename = "Investment Returns")]
    InvestmentReturns,
    Salary,
    Other,
}

impl IncomeSource {
    /// All sources in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Savings,
            Self::GiftFromParents,
            Self::Loan,
            Self::InvestmentReturns,
            Self::Salary,
            Self::Other,
        ]
    }

    /// Stored name of the source
    pub fn name(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::GiftFromParents => "Gift from Parents",
            Self::Loan => "Loan",
            Self::InvestmentReturns => "Investment Returns",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }

    /// Next source in display order, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// Previous source in display order, wrapping around
    pub fn prev(self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|s| *s == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for IncomeSource {
    type Err = IncomeValidationError;

    /// Case-insensitive; hyphens and underscores count as spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ").to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|source| source.name().to_lowercase() == wanted)
            .ok_or_else(|| IncomeValidationError::UnknownSource(s.to_string()))
    }
}

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyDescription,
    NegativeAmount,
    UnknownSource(String),
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Income description cannot be empty"),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::UnknownSource(s) => write!(f, "Unknown income source '{}'", s),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A stored income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub source: IncomeSource,
    pub description: String,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Income {
    /// The user-editable part of this entry
    pub fn to_draft(&self) -> IncomeDraft {
        IncomeDraft {
            source: self.source,
            description: self.description.clone(),
            amount: self.amount,
        }
    }
}

/// The user-editable fields of an income entry, as submitted from a form
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeDraft {
    pub source: IncomeSource,
    pub description: String,
    pub amount: Money,
}

impl IncomeDraft {
    /// Validate the draft before it is written
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.description.trim().is_empty() {
            return Err(IncomeValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_names_round_trip() {
        for source in IncomeSource::all() {
            let json = serde_json::to_string(source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.name()));
            let back: IncomeSource = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *source);
        }
    }

    #[test]
    fn test_source_from_str() {
        assert_eq!(
            "gift-from-parents".parse::<IncomeSource>().unwrap(),
            IncomeSource::GiftFromParents
        );
        assert_eq!("SALARY".parse::<IncomeSource>().unwrap(), IncomeSource::Salary);
        assert!("Lottery".parse::<IncomeSource>().is_err());
    }

    #[test]
    fn test_source_cycle() {
        assert_eq!(IncomeSource::Savings.next(), IncomeSource::GiftFromParents);
        assert_eq!(IncomeSource::Other.next(), IncomeSource::Savings);
        assert_eq!(IncomeSource::Savings.prev(), IncomeSource::Other);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = IncomeDraft {
            source: IncomeSource::Salary,
            description: "Bonus".into(),
            amount: Money::from_units(10000),
        };
        assert!(draft.validate().is_ok());

        draft.amount = Money::from_units(-5);
        assert_eq!(draft.validate(), Err(IncomeValidationError::NegativeAmount));

        draft.amount = Money::zero();
        draft.description = " ".into();
        assert_eq!(draft.validate(), Err(IncomeValidationError::EmptyDescription));
    }
}
