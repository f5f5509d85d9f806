//! Service layer for the expense tracker
//!
//! Business logic sitting between the CLI and the storage layer.

pub mod tracker;

pub use tracker::ExpenseTracker;
