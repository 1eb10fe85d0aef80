//! Budget store adapter
//!
//! Holds the three live subscriptions of one user (expenses, income,
//! categories) and forwards every snapshot into a channel the owner drains
//! on its own thread. Writes report success or failure to the caller, but
//! their effect only shows up through the next snapshot.

pub mod records;

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use chrono::Utc;

use crate::backend::{
    Collection, CollectionPath, Document, DocumentStore, SnapshotListener, SubscriptionSet,
};
use crate::error::{WeddingError, WeddingResult};
use crate::models::category::validate_category_name;
use crate::models::{
    CategoryId, CustomCategory, Expense, ExpenseDraft, ExpenseId, Income, IncomeDraft, IncomeId,
    UserId,
};

use records::Stamp;

/// A full replacement snapshot of one collection
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Expenses(Vec<Expense>),
    Income(Vec<Income>),
    Categories(Vec<CustomCategory>),
}

/// Live view of one user's budget collections
pub struct BudgetStore {
    store: Arc<dyn DocumentStore>,
    user: UserId,
    subscriptions: SubscriptionSet,
    events: Receiver<StoreEvent>,
}

fn forward(
    sender: &Sender<StoreEvent>,
    to_event: fn(&[Document]) -> StoreEvent,
) -> SnapshotListener {
    let sender = sender.clone();
    Arc::new(move |documents: &[Document]| {
        // The receiver is gone once the store is closed
        let _ = sender.send(to_event(documents));
    })
}

impl BudgetStore {
    /// Subscribe to the user's three collections
    ///
    /// If any subscription fails, the ones already established are released
    /// before the error is returned.
    pub fn open(store: Arc<dyn DocumentStore>, user: UserId) -> WeddingResult<Self> {
        let (sender, events) = mpsc::channel();
        let mut subscriptions = SubscriptionSet::new();

        subscriptions.push(store.subscribe(
            &CollectionPath::new(user, Collection::Expenses),
            forward(&sender, |docs| {
                StoreEvent::Expenses(records::decode_all(docs, "expense", records::decode_expense))
            }),
        )?);
        subscriptions.push(store.subscribe(
            &CollectionPath::new(user, Collection::Income),
            forward(&sender, |docs| {
                StoreEvent::Income(records::decode_all(docs, "income", records::decode_income))
            }),
        )?);
        subscriptions.push(store.subscribe(
            &CollectionPath::new(user, Collection::Categories),
            forward(&sender, |docs| {
                StoreEvent::Categories(records::decode_all(
                    docs,
                    "category",
                    records::decode_category,
                ))
            }),
        )?);

        tracing::debug!(user = %user, "Budget store opened");
        Ok(Self {
            store,
            user,
            subscriptions,
            events,
        })
    }

    /// Owner of the collections
    pub fn user(&self) -> UserId {
        self.user
    }

    /// Whether the subscriptions are still live
    pub fn is_open(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Take every snapshot received since the last call, in arrival order
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.events.try_iter().collect()
    }

    /// Release all three subscriptions
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!(user = %self.user, "Budget store closed");
        }
        self.subscriptions.release_all();
    }

    fn path(&self, collection: Collection) -> CollectionPath {
        CollectionPath::new(self.user, collection)
    }

    fn logged<T>(&self, action: &str, result: WeddingResult<T>) -> WeddingResult<T> {
        if let Err(e) = &result {
            tracing::error!(user = %self.user, action, error = %e, "Write failed");
        }
        result
    }

    /// Add an expense
    pub fn create_expense(&self, draft: &ExpenseDraft) -> WeddingResult<ExpenseId> {
        draft
            .validate()
            .map_err(|e| WeddingError::Validation(e.to_string()))?;
        let result = records::expense_fields(draft, Stamp::Created(Utc::now()))
            .and_then(|fields| self.store.create(&self.path(Collection::Expenses), fields))
            .and_then(|id| {
                ExpenseId::parse(&id)
                    .map_err(|e| WeddingError::Storage(format!("Backend returned id '{}': {}", id, e)))
            });
        let id = self.logged("create expense", result)?;
        tracing::info!(expense = %id, "Expense created");
        Ok(id)
    }

    /// Replace the editable fields of an expense, keeping createdAt
    pub fn update_expense(&self, id: ExpenseId, draft: &ExpenseDraft) -> WeddingResult<()> {
        draft
            .validate()
            .map_err(|e| WeddingError::Validation(e.to_string()))?;
        let result = records::expense_fields(draft, Stamp::Updated(Utc::now())).and_then(
            |fields| {
                self.store
                    .update(&self.path(Collection::Expenses), &id.key(), fields)
            },
        );
        self.logged("update expense", result)?;
        tracing::info!(expense = %id, "Expense updated");
        Ok(())
    }

    /// Remove an expense
    pub fn delete_expense(&self, id: ExpenseId) -> WeddingResult<()> {
        let result = self
            .store
            .delete(&self.path(Collection::Expenses), &id.key());
        self.logged("delete expense", result)?;
        tracing::info!(expense = %id, "Expense deleted");
        Ok(())
    }

    /// Add an income entry
    pub fn create_income(&self, draft: &IncomeDraft) -> WeddingResult<IncomeId> {
        draft
            .validate()
            .map_err(|e| WeddingError::Validation(e.to_string()))?;
        let result = records::income_fields(draft, Stamp::Created(Utc::now()))
            .and_then(|fields| self.store.create(&self.path(Collection::Income), fields))
            .and_then(|id| {
                IncomeId::parse(&id)
                    .map_err(|e| WeddingError::Storage(format!("Backend returned id '{}': {}", id, e)))
            });
        let id = self.logged("create income", result)?;
        tracing::info!(income = %id, "Income created");
        Ok(id)
    }

    /// Replace the editable fields of an income entry, keeping createdAt
    pub fn update_income(&self, id: IncomeId, draft: &IncomeDraft) -> WeddingResult<()> {
        draft
            .validate()
            .map_err(|e| WeddingError::Validation(e.to_string()))?;
        let result = records::income_fields(draft, Stamp::Updated(Utc::now())).and_then(
            |fields| {
                self.store
                    .update(&self.path(Collection::Income), &id.key(), fields)
            },
        );
        self.logged("update income", result)?;
        tracing::info!(income = %id, "Income updated");
        Ok(())
    }

    /// Remove an income entry
    pub fn delete_income(&self, id: IncomeId) -> WeddingResult<()> {
        let result = self.store.delete(&self.path(Collection::Income), &id.key());
        self.logged("delete income", result)?;
        tracing::info!(income = %id, "Income deleted");
        Ok(())
    }

    /// Add a custom category
    pub fn add_category(&self, name: &str) -> WeddingResult<CategoryId> {
        validate_category_name(name).map_err(|e| WeddingError::Validation(e.to_string()))?;
        let result = records::category_fields(name, Utc::now())
            .and_then(|fields| self.store.create(&self.path(Collection::Categories), fields))
            .and_then(|id| {
                CategoryId::parse(&id)
                    .map_err(|e| WeddingError::Storage(format!("Backend returned id '{}': {}", id, e)))
            });
        let id = self.logged("add category", result)?;
        tracing::info!(category = %id, name = name.trim(), "Category added");
        Ok(id)
    }

    /// Remove a custom category; expenses tagged with its name are untouched
    pub fn delete_category(&self, id: CategoryId) -> WeddingResult<()> {
        let result = self
            .store
            .delete(&self.path(Collection::Categories), &id.key());
        self.logged("delete category", result)?;
        tracing::info!(category = %id, "Category deleted");
        Ok(())
    }
}

impl Drop for BudgetStore {
    fn drop(&mut self) {
        self.close();
    }
}
