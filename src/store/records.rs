//! Document encoding for budget records
//!
//! Field names are camelCase. Missing numeric fields decode as zero; a
//! document that cannot be decoded at all is skipped with a warning.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::{Document, Fields};
use crate::error::{WeddingError, WeddingResult};
use crate::models::{
    CategoryId, CustomCategory, Expense, ExpenseDraft, ExpenseId, ExpenseStatus, Income,
    IncomeDraft, IncomeId, IncomeSource, Money,
};

/// Timestamps written alongside a record
#[derive(Debug, Clone, Copy)]
pub enum Stamp {
    /// New record: sets both createdAt and updatedAt
    Created(DateTime<Utc>),
    /// Existing record: sets updatedAt only
    Updated(DateTime<Utc>),
}

impl Stamp {
    fn created_at(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Created(at) => Some(at),
            Self::Updated(_) => None,
        }
    }

    fn updated_at(self) -> DateTime<Utc> {
        match self {
            Self::Created(at) | Self::Updated(at) => at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseRecord {
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default = "Money::zero")]
    expected_amount: Money,
    #[serde(default = "Money::zero")]
    actual_amount: Money,
    #[serde(default)]
    status: ExpenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomeRecord {
    #[serde(default)]
    source: IncomeSource,
    #[serde(default)]
    description: String,
    #[serde(default = "Money::zero")]
    amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

fn to_fields<T: Serialize>(record: &T) -> WeddingResult<Fields> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => Err(WeddingError::Json(format!(
            "Expected an object, got {}",
            other
        ))),
    }
}

fn from_fields<T: DeserializeOwned>(document: &Document) -> WeddingResult<T> {
    Ok(serde_json::from_value(Value::Object(document.fields.clone()))?)
}

/// Fields written for an expense
pub fn expense_fields(draft: &ExpenseDraft, stamp: Stamp) -> WeddingResult<Fields> {
    to_fields(&ExpenseRecord {
        category: draft.category.trim().to_string(),
        description: draft.description.trim().to_string(),
        expected_amount: draft.expected_amount,
        actual_amount: draft.actual_amount,
        status: draft.status,
        created_at: stamp.created_at(),
        updated_at: Some(stamp.updated_at()),
    })
}

/// Fields written for an income entry
pub fn income_fields(draft: &IncomeDraft, stamp: Stamp) -> WeddingResult<Fields> {
    to_fields(&IncomeRecord {
        source: draft.source,
        description: draft.description.trim().to_string(),
        amount: draft.amount,
        created_at: stamp.created_at(),
        updated_at: Some(stamp.updated_at()),
    })
}

/// Fields written for a new custom category
pub fn category_fields(name: &str, created_at: DateTime<Utc>) -> WeddingResult<Fields> {
    to_fields(&CategoryRecord {
        name: name.trim().to_string(),
        created_at: Some(created_at),
    })
}

fn parse_id<T>(document: &Document, parse: fn(&str) -> Result<T, uuid::Error>) -> WeddingResult<T> {
    parse(&document.id)
        .map_err(|e| WeddingError::Json(format!("Invalid document id '{}': {}", document.id, e)))
}

/// Decode one expense document
pub fn decode_expense(document: &Document) -> WeddingResult<Expense> {
    let record: ExpenseRecord = from_fields(document)?;
    let created_at = record.created_at.unwrap_or_default();
    Ok(Expense {
        id: parse_id(document, ExpenseId::parse)?,
        category: record.category,
        description: record.description,
        expected_amount: record.expected_amount,
        actual_amount: record.actual_amount,
        status: record.status,
        created_at,
        updated_at: record.updated_at.unwrap_or(created_at),
    })
}

/// Decode one income document
pub fn decode_income(document: &Document) -> WeddingResult<Income> {
    let record: IncomeRecord = from_fields(document)?;
    let created_at = record.created_at.unwrap_or_default();
    Ok(Income {
        id: parse_id(document, IncomeId::parse)?,
        source: record.source,
        description: record.description,
        amount: record.amount,
        created_at,
        updated_at: record.updated_at.unwrap_or(created_at),
    })
}

/// Decode one category document
pub fn decode_category(document: &Document) -> WeddingResult<CustomCategory> {
    let record: CategoryRecord = from_fields(document)?;
    Ok(CustomCategory {
        id: parse_id(document, CategoryId::parse)?,
        name: record.name,
        created_at: record.created_at.unwrap_or_default(),
    })
}

/// Decode a snapshot, keeping document order and skipping bad documents
pub fn decode_all<T>(
    documents: &[Document],
    kind: &'static str,
    decode: fn(&Document) -> WeddingResult<T>,
) -> Vec<T> {
    documents
        .iter()
        .filter_map(|document| match decode(document) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(kind, id = %document.id, error = %e, "Skipping undecodable document");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(id: &str, fields: Value) -> Document {
        Document {
            id: id.to_string(),
            fields: fields.as_object().cloned().unwrap(),
        }
    }

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_expense_fields_on_create_and_update() {
        let draft = ExpenseDraft {
            category: "Venue".into(),
            description: " Hall ".into(),
            expected_amount: Money::from_units(500),
            actual_amount: Money::zero(),
            status: ExpenseStatus::Expected,
        };
        let now = Utc::now();

        let created = expense_fields(&draft, Stamp::Created(now)).unwrap();
        assert_eq!(created["description"], json!("Hall"));
        assert_eq!(created["status"], json!("expected"));
        assert!(created.contains_key("expectedAmount"));
        assert!(created.contains_key("createdAt"));
        assert!(created.contains_key("updatedAt"));

        let updated = expense_fields(&draft, Stamp::Updated(now)).unwrap();
        assert!(!updated.contains_key("createdAt"));
        assert!(updated.contains_key("updatedAt"));
    }

    #[test]
    fn test_decode_expense_missing_numbers_are_zero() {
        let doc = document(ID, json!({"category": "Music", "description": "Band"}));
        let expense = decode_expense(&doc).unwrap();
        assert_eq!(expense.expected_amount, Money::zero());
        assert_eq!(expense.actual_amount, Money::zero());
        assert_eq!(expense.status, ExpenseStatus::Expected);
    }

    #[test]
    fn test_decode_accepts_numeric_amounts() {
        let doc = document(
            ID,
            json!({"source": "Gift from Parents", "description": "Gift", "amount": 2500.5}),
        );
        let income = decode_income(&doc).unwrap();
        assert_eq!(income.source, IncomeSource::GiftFromParents);
        assert_eq!(income.amount, Money::from_cents(250050));
    }

    #[test]
    fn test_decode_all_skips_bad_documents() {
        let docs = vec![
            document(ID, json!({"name": "Cake"})),
            document("not-a-uuid", json!({"name": "Favors"})),
            document(ID, json!({"name": 12})),
        ];
        let categories = decode_all(&docs, "category", decode_category);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Cake");
    }
}
