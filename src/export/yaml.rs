//! YAML Export functionality
//!
//! Exports the expense list to YAML for human-readable backup.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export all expenses as a YAML sequence
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<()> {
    writeln!(writer, "# Expense Tracker export ({} expenses)", expenses.len())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, expenses).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_export_yaml() {
        let when = NaiveDate::from_ymd_opt(2024, 8, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let expenses = vec![Expense::at(Money::new(dec!(42.5)), "fun", "concert", when)];

        let mut output = Vec::new();
        export_expenses_yaml(&expenses, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Expense Tracker export (1 expenses)"));
        assert!(yaml.contains("amount: 42.5"));
        assert!(yaml.contains("category: fun"));

        let parsed: Vec<Expense> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, expenses);
    }
}
