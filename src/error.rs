//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Amount entered by the user is non-numeric or not positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The backing file exists but does not hold a valid record list
    #[error("Corrupted store {}: {reason}", .path.display())]
    CorruptedStore { path: PathBuf, reason: String },

    /// Saving the record list failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Unrecognized menu choice
    #[error("Invalid choice: '{0}'")]
    InvalidChoice(String),
}

impl ExpenseError {
    /// Create a "corrupted store" error for the given file
    pub fn corrupted(path: &Path, reason: impl Into<String>) -> Self {
        Self::CorruptedStore {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this error means the store file could not be decoded
    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::CorruptedStore { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::InvalidAmount("Amount should be greater than zero.".into());
        assert_eq!(
            err.to_string(),
            "Invalid amount: Amount should be greater than zero."
        );
        assert!(err.is_invalid_amount());
    }

    #[test]
    fn test_corrupted_store_error() {
        let err = ExpenseError::corrupted(Path::new("expenses.json"), "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Corrupted store expenses.json: expected value at line 1"
        );
        assert!(err.is_corrupted());
        assert!(!err.is_invalid_amount());
    }

    #[test]
    fn test_invalid_choice_error() {
        let err = ExpenseError::InvalidChoice("9".into());
        assert_eq!(err.to_string(), "Invalid choice: '9'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
