//! Grouped expense totals
//!
//! A summary folds a list of expenses into one row per distinct key, keeping
//! the order in which each key was first seen.

use std::collections::HashMap;

use crate::models::{Expense, Money};

/// Total for one group of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Grouping key (a month key or a category)
    pub key: String,
    /// Sum of the group's amounts
    pub total: Money,
    /// Number of expenses in the group
    pub count: usize,
}

/// Ordered grouped totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    rows: Vec<SummaryRow>,
}

impl Summary {
    /// Group expenses by `key`, preserving first-encounter order of keys
    pub fn group_by<'a, I, F>(expenses: I, key: F) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
        F: Fn(&'a Expense) -> &'a str,
    {
        let mut rows: Vec<SummaryRow> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();

        for expense in expenses {
            let group = key(expense);
            let slot = *index.entry(group).or_insert_with(|| {
                rows.push(SummaryRow {
                    key: group.to_string(),
                    total: Money::zero(),
                    count: 0,
                });
                rows.len() - 1
            });

            let row = &mut rows[slot];
            row.total += expense.amount();
            row.count += 1;
        }

        Self { rows }
    }

    /// Rows in first-encounter order
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the row for a key
    pub fn get(&self, key: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Sum over all rows
    pub fn grand_total(&self) -> Money {
        self.rows.iter().map(|row| row.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(amount: Money, category: &str, y: i32, m: u32) -> Expense {
        let when = NaiveDate::from_ymd_opt(y, m, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Expense::at(amount, category, "", when)
    }

    #[test]
    fn test_group_by_keeps_first_encounter_order() {
        let expenses = vec![
            expense(Money::new(dec!(2)), "travel", 2024, 3),
            expense(Money::new(dec!(1)), "food", 2024, 1),
            expense(Money::new(dec!(4)), "travel", 2024, 1),
        ];

        let summary = Summary::group_by(&expenses, Expense::category);
        let keys: Vec<_> = summary.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["travel", "food"]);

        let travel = summary.get("travel").unwrap();
        assert_eq!(travel.total, Money::new(dec!(6)));
        assert_eq!(travel.count, 2);

        let by_month = Summary::group_by(&expenses, Expense::month_key);
        let months: Vec<_> = by_month.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(months, ["2024-03", "2024-01"]);
    }

    #[test]
    fn test_grand_total_matches_input() {
        let expenses = vec![
            expense(Money::new(dec!(0.1)), "a", 2023, 12),
            expense(Money::new(dec!(0.2)), "b", 2024, 1),
            expense(Money::new(dec!(0.3)), "a", 2024, 2),
        ];
        let summary = Summary::group_by(&expenses, Expense::month_key);
        assert_eq!(summary.len(), 3);
        assert_eq!(summary.grand_total(), Money::new(dec!(0.6)));
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::group_by(&Vec::new(), Expense::category);
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total(), Money::zero());
    }
}
