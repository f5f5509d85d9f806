//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-friendly CSV file.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export all expenses to CSV, amounts with two decimals
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["amount", "category", "description", "date"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let amount = format!("{:.2}", expense.amount().rounded());
        csv_writer
            .write_record([
                amount.as_str(),
                expense.category(),
                expense.description(),
                expense.date(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_export_csv() {
        let when = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        let expenses = vec![
            Expense::at(Money::new(dec!(10.5)), "food", "lunch", when),
            Expense::at(Money::new(dec!(3)), "misc", "pens, paper", when),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "amount,category,description,date");
        assert_eq!(lines[1], "10.50,food,lunch,2024-02-29 07:05:00");
        assert_eq!(lines[2], "3.00,misc,\"pens, paper\",2024-02-29 07:05:00");
    }

    #[test]
    fn test_export_csv_empty_has_header_only() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "amount,category,description,date\n"
        );
    }
}
