//! JSON Export functionality
//!
//! Writes expenses in the same layout as the data file, so an export can be
//! used directly as a data file elsewhere.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export all expenses as a pretty-printed JSON array
pub fn export_expenses_json<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut writer, expenses)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
