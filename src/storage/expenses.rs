//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense list to a single JSON file. The
//! whole list is read at startup and rewritten on every change.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the flat list of expenses
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses, in stored order
    ///
    /// A missing file is an empty list. Content that is not a list of valid
    /// records yields [`ExpenseError::CorruptedStore`].
    pub fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Overwrite the backing file with the full expense list
    pub fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, expenses)?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}
