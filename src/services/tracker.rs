//! Expense tracker service
//!
//! Owns the in-memory expense list and exposes the add, query and aggregate
//! operations. Every successful add rewrites the backing store.

use tracing::{error, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::reports::Summary;
use crate::storage::ExpenseStore;

/// In-memory expense list backed by an [`ExpenseStore`]
pub struct ExpenseTracker {
    store: ExpenseStore,
    expenses: Vec<Expense>,
    load_error: Option<ExpenseError>,
}

impl ExpenseTracker {
    /// Open a tracker over `store`, loading whatever it holds
    ///
    /// A store that cannot be read leaves the tracker empty; the failure is
    /// kept and available through [`ExpenseTracker::load_error`].
    pub fn open(store: ExpenseStore) -> Self {
        let (expenses, load_error) = match store.load() {
            Ok(expenses) => (expenses, None),
            Err(e) => {
                warn!(path = %store.path().display(), error = %e, "starting with no expenses");
                (Vec::new(), Some(e))
            }
        };

        Self {
            store,
            expenses,
            load_error,
        }
    }

    /// Error raised by the initial load, if any
    pub fn load_error(&self) -> Option<&ExpenseError> {
        self.load_error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Record a new expense and persist the full list
    ///
    /// `amount` is raw user input. A non-numeric or non-positive amount is
    /// rejected with [`ExpenseError::InvalidAmount`] and nothing changes. If
    /// the save fails the expense stays in memory and the storage error is
    /// returned.
    pub fn add(&mut self, amount: &str, category: &str, description: &str) -> ExpenseResult<&Expense> {
        let amount = Money::parse_positive(amount)
            .map_err(|e| ExpenseError::InvalidAmount(e.to_string()))?;

        self.expenses.push(Expense::new(amount, category, description));
        info!(%amount, category, "expense added");

        if let Err(e) = self.store.save(&self.expenses) {
            error!(path = %self.store.path().display(), error = %e, "failed to save expenses");
            return Err(e);
        }

        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// All expenses paired with their 1-based position
    pub fn list_all(&self) -> Vec<(usize, &Expense)> {
        self.expenses
            .iter()
            .enumerate()
            .map(|(i, expense)| (i + 1, expense))
            .collect()
    }

    /// Sum of every expense amount
    pub fn total(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Expenses whose category matches ignoring case, in insertion order
    pub fn filter_by_category(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.in_category(category))
            .collect()
    }

    /// Totals per `YYYY-MM` month key, in first-encounter order
    pub fn monthly_summary(&self) -> Summary {
        Summary::group_by(&self.expenses, Expense::month_key)
    }

    /// Totals per exact category string, in first-encounter order
    pub fn category_summary(&self) -> Summary {
        Summary::group_by(&self.expenses, Expense::category)
    }
}
