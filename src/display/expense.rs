//! Expense display formatting
//!
//! Formats expenses, totals and summaries for terminal output.

use crate::models::{Expense, Money};
use crate::reports::Summary;

/// Format one numbered expense line
pub fn format_expense_line(index: usize, expense: &Expense) -> String {
    format!(
        "{}. {} - {}: {} - {}",
        index,
        expense.date(),
        expense.category(),
        expense.amount(),
        expense.description()
    )
}

/// Format a numbered list, one expense per line
pub fn format_expense_list<'a, I>(expenses: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Expense)>,
{
    let mut output = String::new();
    for (index, expense) in expenses {
        output.push_str(&format_expense_line(index, expense));
        output.push('\n');
    }
    output
}

/// Format the grand total line
pub fn format_total(total: Money) -> String {
    format!("Total Expenses: {}", total)
}

/// Format a summary as `key: $total` lines
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();
    for row in summary.rows() {
        output.push_str(&format!("{}: {}\n", row.key, row.total));
    }
    output
}
