//! Expense model
//!
//! An expense is one logged transaction: an amount, a category, a free-text
//! description and the local time it was recorded. Expenses are immutable once
//! created.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;

/// Timestamp layout used both in memory and on disk
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of the `YYYY-MM` prefix of a timestamp
const MONTH_KEY_LEN: usize = 7;

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredExpense")]
pub struct Expense {
    amount: Money,
    category: String,
    description: String,
    /// Creation time, kept exactly as written so re-saving never reformats it
    date: String,
}

/// Problems found in a record read back from disk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("amount must be greater than zero, found {0}")]
    NonPositiveAmount(Money),

    #[error("amount {0} is out of range")]
    AmountOutOfRange(Money),

    #[error("date '{0}' is not in YYYY-MM-DD HH:MM:SS format")]
    BadTimestamp(String),
}

/// On-disk shape of an expense, decoded before validation
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StoredExpense {
    amount: Money,
    category: String,
    description: String,
    date: String,
}

impl TryFrom<StoredExpense> for Expense {
    type Error = RecordError;

    fn try_from(stored: StoredExpense) -> Result<Self, Self::Error> {
        if !stored.amount.is_positive() {
            return Err(RecordError::NonPositiveAmount(stored.amount));
        }
        if !stored.amount.is_within_bounds() {
            return Err(RecordError::AmountOutOfRange(stored.amount));
        }
        if NaiveDateTime::parse_from_str(&stored.date, TIMESTAMP_FORMAT).is_err() {
            return Err(RecordError::BadTimestamp(stored.date));
        }

        Ok(Self {
            amount: stored.amount,
            category: stored.category,
            description: stored.description,
            date: stored.date,
        })
    }
}

impl Expense {
    /// Create a new expense stamped with the current local time
    ///
    /// The caller is responsible for having validated `amount > 0`.
    pub fn new(amount: Money, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self::at(amount, category, description, Local::now().naive_local())
    }

    /// Create an expense recorded at a specific time
    pub fn at(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS`
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The `YYYY-MM` month key used for monthly grouping
    pub fn month_key(&self) -> &str {
        self.date.get(..MONTH_KEY_LEN).unwrap_or(&self.date)
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
