//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-file` command-line flag (handled by the caller)
//! 2. `EXPENSE_TRACKER_DATA_FILE` environment variable (if set and non-empty)
//! 3. `expenses.json` in the current working directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the data file location
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_DATA_FILE";

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Locates the files used by the expense tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePaths {
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from the environment, falling back to the default
    pub fn new() -> Self {
        let data_file = std::env::var_os(DATA_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    /// Use an explicit data file (command-line override, tests)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the expense data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new()
    }
}
