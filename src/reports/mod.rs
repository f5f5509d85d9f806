//! Reports module
//!
//! Aggregations over the expense list.

pub mod summary;

pub use summary::{Summary, SummaryRow};
