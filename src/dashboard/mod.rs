//! Dashboard state
//!
//! Owns the budget store of the signed-in user and the transient UI state
//! around it: the selected tab and at most one open form per entity. Lists
//! are only ever replaced by store snapshots, never edited locally.

pub mod forms;

use std::sync::Arc;

use crate::backend::DocumentStore;
use crate::error::{WeddingError, WeddingResult};
use crate::models::category::validate_category_name;
use crate::models::{
    category_choices, category_names, is_builtin, CategoryChoice, CategoryId, CustomCategory,
    Expense, ExpenseId, Income, IncomeId, UserId,
};
use crate::services::BudgetSummary;
use crate::store::{BudgetStore, StoreEvent};

pub use forms::{ExpenseForm, FormMode, IncomeForm, OpenForm};

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Expenses,
    Income,
    Categories,
}

impl Tab {
    /// All tabs in display order
    pub fn all() -> &'static [Self] {
        &[Self::Expenses, Self::Income, Self::Categories]
    }

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Income => "Income",
            Self::Categories => "Manage Categories",
        }
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        match self {
            Self::Expenses => 0,
            Self::Income => 1,
            Self::Categories => 2,
        }
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Find exactly one record whose id matches a user-typed reference
fn resolve<'a, T>(
    items: &'a [T],
    reference: &str,
    matches: impl Fn(&T) -> bool,
    not_found: fn(String) -> WeddingError,
) -> WeddingResult<&'a T> {
    let mut found = items.iter().filter(|item| matches(item));
    match (found.next(), found.next()) {
        (Some(item), None) => Ok(item),
        (None, _) => Err(not_found(reference.to_string())),
        (Some(_), Some(_)) => Err(WeddingError::Validation(format!(
            "'{}' matches more than one entry; use a longer id",
            reference
        ))),
    }
}

/// The authenticated budget view
pub struct Dashboard {
    store: BudgetStore,
    expenses: Vec<Expense>,
    income: Vec<Income>,
    categories: Vec<CustomCategory>,
    tab: Tab,
    expense_form: Option<OpenForm<ExpenseId, ExpenseForm>>,
    income_form: Option<OpenForm<IncomeId, IncomeForm>>,
}

impl Dashboard {
    /// Subscribe to the user's budget and load the first snapshots
    pub fn open(documents: Arc<dyn DocumentStore>, user: UserId) -> WeddingResult<Self> {
        let store = BudgetStore::open(documents, user)?;
        let mut dashboard = Self {
            store,
            expenses: Vec::new(),
            income: Vec::new(),
            categories: Vec::new(),
            tab: Tab::default(),
            expense_form: None,
            income_form: None,
        };
        dashboard.sync();
        Ok(dashboard)
    }

    /// Apply every pending snapshot; returns whether anything changed
    pub fn sync(&mut self) -> bool {
        let events = self.store.drain();
        let changed = !events.is_empty();
        for event in events {
            match event {
                StoreEvent::Expenses(expenses) => self.expenses = expenses,
                StoreEvent::Income(income) => self.income = income,
                StoreEvent::Categories(categories) => self.categories = categories,
            }
        }
        changed
    }

    /// Release the store subscriptions
    pub fn close(&mut self) {
        self.store.close();
    }

    /// Whether the store subscriptions are live
    pub fn is_open(&self) -> bool {
        self.store.is_open()
    }

    /// Owner of the budget
    pub fn user(&self) -> UserId {
        self.store.user()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn income(&self) -> &[Income] {
        &self.income
    }

    /// User-defined categories in store order
    pub fn custom_categories(&self) -> &[CustomCategory] {
        &self.categories
    }

    /// Built-in categories followed by custom ones
    pub fn category_choices(&self) -> Vec<CategoryChoice<'_>> {
        category_choices(&self.categories)
    }

    /// Names offered in the expense category picker
    pub fn category_names(&self) -> Vec<String> {
        category_names(&self.categories)
    }

    /// Headline totals, recomputed on every call
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::compute(&self.expenses, &self.income)
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    // === Expenses ===

    /// Look up an expense by full id, display id or unique prefix
    pub fn find_expense(&self, reference: &str) -> WeddingResult<&Expense> {
        resolve(
            &self.expenses,
            reference,
            |e| e.id.matches(reference),
            |r| WeddingError::expense_not_found(r),
        )
    }

    pub fn expense_form(&self) -> Option<&OpenForm<ExpenseId, ExpenseForm>> {
        self.expense_form.as_ref()
    }

    /// Editable fields of the open expense form
    pub fn expense_form_mut(&mut self) -> Option<&mut ExpenseForm> {
        self.expense_form.as_mut().map(|form| &mut form.fields)
    }

    /// Open a blank expense form; does nothing if one is already open
    pub fn open_expense_form(&mut self) {
        if self.expense_form.is_none() {
            self.expense_form = Some(OpenForm {
                mode: FormMode::Create,
                fields: ExpenseForm::default(),
            });
        }
    }

    /// Open the form pre-populated with an existing expense
    pub fn edit_expense(&mut self, id: ExpenseId) -> WeddingResult<()> {
        let expense = self
            .expenses
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| WeddingError::expense_not_found(id.to_string()))?;
        self.expense_form = Some(OpenForm {
            mode: FormMode::Edit(id),
            fields: ExpenseForm::from_expense(expense),
        });
        Ok(())
    }

    /// Discard the expense form
    pub fn cancel_expense_form(&mut self) {
        self.expense_form = None;
    }

    /// Create or update from the open form, closing it on success
    ///
    /// On failure the form stays open with its contents unchanged.
    pub fn submit_expense_form(&mut self) -> WeddingResult<ExpenseId> {
        let form = self
            .expense_form
            .as_ref()
            .ok_or_else(|| WeddingError::Validation("No expense form is open".into()))?;
        let draft = form.fields.to_draft()?;

        let id = match form.mode {
            FormMode::Create => self.store.create_expense(&draft)?,
            FormMode::Edit(id) => {
                self.store.update_expense(id, &draft)?;
                id
            }
        };

        self.expense_form = None;
        Ok(id)
    }

    /// Delete an expense right away
    pub fn delete_expense(&mut self, id: ExpenseId) -> WeddingResult<()> {
        self.store.delete_expense(id)?;
        if matches!(&self.expense_form, Some(OpenForm { mode: FormMode::Edit(editing), .. }) if *editing == id)
        {
            self.expense_form = None;
        }
        Ok(())
    }

    // === Income ===

    /// Look up an income entry by full id, display id or unique prefix
    pub fn find_income(&self, reference: &str) -> WeddingResult<&Income> {
        resolve(
            &self.income,
            reference,
            |i| i.id.matches(reference),
            |r| WeddingError::income_not_found(r),
        )
    }

    pub fn income_form(&self) -> Option<&OpenForm<IncomeId, IncomeForm>> {
        self.income_form.as_ref()
    }

    /// Editable fields of the open income form
    pub fn income_form_mut(&mut self) -> Option<&mut IncomeForm> {
        self.income_form.as_mut().map(|form| &mut form.fields)
    }

    /// Open a blank income form; does nothing if one is already open
    pub fn open_income_form(&mut self) {
        if self.income_form.is_none() {
            self.income_form = Some(OpenForm {
                mode: FormMode::Create,
                fields: IncomeForm::default(),
            });
        }
    }

    /// Open the form pre-populated with an existing income entry
    pub fn edit_income(&mut self, id: IncomeId) -> WeddingResult<()> {
        let income = self
            .income
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| WeddingError::income_not_found(id.to_string()))?;
        self.income_form = Some(OpenForm {
            mode: FormMode::Edit(id),
            fields: IncomeForm::from_income(income),
        });
        Ok(())
    }

    /// Discard the income form
    pub fn cancel_income_form(&mut self) {
        self.income_form = None;
    }

    /// Create or update from the open form, closing it on success
    pub fn submit_income_form(&mut self) -> WeddingResult<IncomeId> {
        let form = self
            .income_form
            .as_ref()
            .ok_or_else(|| WeddingError::Validation("No income form is open".into()))?;
        let draft = form.fields.to_draft()?;

        let id = match form.mode {
            FormMode::Create => self.store.create_income(&draft)?,
            FormMode::Edit(id) => {
                self.store.update_income(id, &draft)?;
                id
            }
        };

        self.income_form = None;
        Ok(id)
    }

    /// Delete an income entry right away
    pub fn delete_income(&mut self, id: IncomeId) -> WeddingResult<()> {
        self.store.delete_income(id)?;
        if matches!(&self.income_form, Some(OpenForm { mode: FormMode::Edit(editing), .. }) if *editing == id)
        {
            self.income_form = None;
        }
        Ok(())
    }

    // === Categories ===

    /// Look up a custom category by name (case-insensitive) or id reference
    pub fn find_category(&self, reference: &str) -> WeddingResult<&CustomCategory> {
        let reference = reference.trim();
        if let Some(category) = self
            .categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(reference))
        {
            return Ok(category);
        }
        resolve(
            &self.categories,
            reference,
            |c| c.id.matches(reference),
            |r| WeddingError::category_not_found(r),
        )
    }

    /// Add a custom category; names already in the list are rejected
    pub fn add_category(&mut self, name: &str) -> WeddingResult<CategoryId> {
        let name = name.trim();
        validate_category_name(name).map_err(|e| WeddingError::Validation(e.to_string()))?;

        if self
            .category_names()
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(name))
        {
            return Err(WeddingError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        self.store.add_category(name)
    }

    /// Delete a custom category; built-ins cannot be deleted
    pub fn delete_category(&mut self, reference: &str) -> WeddingResult<()> {
        if is_builtin(reference) {
            return Err(WeddingError::Validation(format!(
                "'{}' is a built-in category and cannot be deleted",
                reference.trim()
            )));
        }
        let id = self.find_category(reference)?.id;
        self.store.delete_category(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AuthProvider, LocalBackend};
    use crate::config::WeddingPaths;
    use crate::models::{ExpenseStatus, IncomeSource, Money, BUILTIN_CATEGORIES};
    use tempfile::TempDir;

    fn dashboard(dir: &TempDir) -> (Arc<LocalBackend>, Dashboard) {
        let backend = Arc::new(
            LocalBackend::open(&WeddingPaths::with_base_dir(dir.path().to_path_buf())).unwrap(),
        );
        let user = backend.sign_up("jo@example.com", "secret1").unwrap();
        let dashboard = Dashboard::open(backend.clone(), user.id).unwrap();
        (backend, dashboard)
    }

    fn add_expense(dashboard: &mut Dashboard, description: &str, expected: &str) -> ExpenseId {
        dashboard.open_expense_form();
        let form = dashboard.expense_form_mut().unwrap();
        form.description = description.into();
        form.expected_amount = expected.into();
        let id = dashboard.submit_expense_form().unwrap();
        dashboard.sync();
        id
    }

    #[test]
    fn test_create_expense_flow() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);

        let id = add_expense(&mut dashboard, "Reception hall", "500");
        assert!(dashboard.expense_form().is_none());

        let expense = &dashboard.expenses()[0];
        assert_eq!(expense.id, id);
        assert_eq!(expense.category, "Venue");
        assert_eq!(expense.expected_amount, Money::from_units(500));
        assert_eq!(expense.actual_amount, Money::zero());
        assert_eq!(expense.status, ExpenseStatus::Expected);
    }

    #[test]
    fn test_write_not_visible_before_sync() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);

        dashboard.open_expense_form();
        let form = dashboard.expense_form_mut().unwrap();
        form.description = "Cake".into();
        form.expected_amount = "300".into();
        dashboard.submit_expense_form().unwrap();

        assert!(dashboard.expenses().is_empty());
        assert!(dashboard.sync());
        assert_eq!(dashboard.expenses().len(), 1);
    }

    #[test]
    fn test_edit_keeps_id_and_created_at() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);
        let id = add_expense(&mut dashboard, "Band", "800");
        let created_at = dashboard.expenses()[0].created_at;

        dashboard.edit_expense(id).unwrap();
        let open = dashboard.expense_form().unwrap();
        assert_eq!(open.mode, FormMode::Edit(id));
        assert_eq!(open.fields.actual_amount, "");

        let form = dashboard.expense_form_mut().unwrap();
        form.actual_amount = "200".into();
        form.status = ExpenseStatus::Pending;
        assert_eq!(dashboard.submit_expense_form().unwrap(), id);
        dashboard.sync();

        assert_eq!(dashboard.expenses().len(), 1);
        let expense = &dashboard.expenses()[0];
        assert_eq!(expense.id, id);
        assert_eq!(expense.created_at, created_at);
        assert_eq!(expense.actual_amount, Money::from_units(200));
        assert_eq!(expense.status, ExpenseStatus::Pending);
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);

        dashboard.open_expense_form();
        let form = dashboard.expense_form_mut().unwrap();
        form.description = "DJ".into();
        form.expected_amount = "abc".into();
        let before = dashboard.expense_form().cloned();

        assert!(dashboard.submit_expense_form().unwrap_err().is_validation());
        assert_eq!(dashboard.expense_form().cloned(), before);
    }

    #[test]
    fn test_out_of_range_amount_never_stored() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);

        for _ in 0..2 {
            dashboard.open_expense_form();
            let form = dashboard.expense_form_mut().unwrap();
            form.description = "Castle".into();
            form.expected_amount = "79228162514264337593543950335".into();
            assert!(dashboard.submit_expense_form().unwrap_err().is_validation());
            dashboard.cancel_expense_form();
        }

        dashboard.sync();
        assert!(dashboard.expenses().is_empty());
        assert_eq!(dashboard.summary().total_expected, Money::zero());
    }

    #[test]
    fn test_cancel_and_reopen_resets_defaults() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);

        dashboard.open_expense_form();
        dashboard.expense_form_mut().unwrap().description = "Draft".into();
        dashboard.open_expense_form();
        assert_eq!(dashboard.expense_form().unwrap().fields.description, "Draft");

        dashboard.cancel_expense_form();
        dashboard.open_expense_form();
        assert_eq!(dashboard.expense_form().unwrap().fields, ExpenseForm::default());
    }

    #[test]
    fn test_delete_expense() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);
        let id = add_expense(&mut dashboard, "Limo", "400");

        dashboard.delete_expense(id).unwrap();
        dashboard.sync();
        assert!(dashboard.expenses().is_empty());
    }

    #[test]
    fn test_income_changes_summary() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);
        let before = dashboard.summary().total_income;

        dashboard.open_income_form();
        let form = dashboard.income_form_mut().unwrap();
        form.source = IncomeSource::Salary;
        form.description = "Bonus".into();
        form.amount = "10000".into();
        let id = dashboard.submit_income_form().unwrap();
        dashboard.sync();
        assert_eq!(
            dashboard.summary().total_income,
            before + Money::from_units(10000)
        );

        dashboard.delete_income(id).unwrap();
        dashboard.sync();
        assert_eq!(dashboard.summary().total_income, before);
    }

    #[test]
    fn test_find_by_reference() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);
        let id = add_expense(&mut dashboard, "Suit", "600");

        assert_eq!(dashboard.find_expense(&id.to_string()).unwrap().id, id);
        assert_eq!(dashboard.find_expense(&id.key()).unwrap().id, id);
        assert!(dashboard.find_expense("zzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_category_management() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);

        dashboard.add_category("Favors").unwrap();
        dashboard.add_category("Cake").unwrap();
        dashboard.sync();

        let names = dashboard.category_names();
        assert_eq!(&names[..BUILTIN_CATEGORIES.len()], BUILTIN_CATEGORIES);
        assert_eq!(&names[BUILTIN_CATEGORIES.len()..], ["Favors", "Cake"]);

        assert!(matches!(
            dashboard.add_category("favors"),
            Err(WeddingError::Duplicate { .. })
        ));
        assert!(matches!(
            dashboard.add_category("Venue"),
            Err(WeddingError::Duplicate { .. })
        ));
        assert!(dashboard.delete_category("Venue").unwrap_err().is_validation());
    }

    #[test]
    fn test_deleting_category_keeps_expense_category() {
        let dir = TempDir::new().unwrap();
        let (_backend, mut dashboard) = dashboard(&dir);
        dashboard.add_category("Favors").unwrap();
        dashboard.sync();

        dashboard.open_expense_form();
        let form = dashboard.expense_form_mut().unwrap();
        form.category = "Favors".into();
        form.description = "Candles".into();
        form.expected_amount = "50".into();
        dashboard.submit_expense_form().unwrap();
        dashboard.sync();

        dashboard.delete_category("Favors").unwrap();
        dashboard.sync();

        assert!(!dashboard.category_names().contains(&"Favors".to_string()));
        assert_eq!(dashboard.expenses()[0].category, "Favors");
    }

    #[test]
    fn test_close_stops_emissions() {
        let dir = TempDir::new().unwrap();
        let (backend, mut dashboard) = dashboard(&dir);
        assert_eq!(backend.listener_count(), 3);

        dashboard.close();
        assert_eq!(backend.listener_count(), 0);
        assert!(!dashboard.sync());
    }
}
