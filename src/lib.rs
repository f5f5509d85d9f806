//! Expense Tracker - personal expense log for the terminal
//!
//! Records expenses (amount, category, description, timestamp) in a single
//! local JSON file and reports totals per month and per category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file resolution and logging setup
//! - `error`: Custom error types
//! - `models`: The expense record and money type
//! - `storage`: JSON file storage layer
//! - `services`: The expense tracker (add, query, aggregate)
//! - `reports`: Grouped summaries
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Interactive menu and export command
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::services::ExpenseTracker;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let mut tracker = ExpenseTracker::open(ExpenseStore::new("expenses.json"));
//! tracker.add("10.50", "food", "lunch")?;
//! println!("Total: {}", tracker.total());
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
