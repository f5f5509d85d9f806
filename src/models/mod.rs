//! Core data models for the expense tracker
//!
//! An expense record and the money type used for its amount.

pub mod expense;
pub mod money;

pub use expense::{Expense, RecordError, TIMESTAMP_FORMAT};
pub use money::{Money, MoneyParseError};
