//! Interactive menu shell
//!
//! Prints the numbered menu, reads one line per prompt and dispatches to the
//! tracker until the user exits or input ends. Input and output are generic
//! so the whole loop can be driven from tests.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::display::{format_expense_list, format_summary, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::Summary;
use crate::services::ExpenseTracker;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewAll,
    ViewTotal,
    FilterByCategory,
    MonthlySummary,
    CategorySummary,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 7] = [
        Self::AddExpense,
        Self::ViewAll,
        Self::ViewTotal,
        Self::FilterByCategory,
        Self::MonthlySummary,
        Self::CategorySummary,
        Self::Exit,
    ];

    /// The number typed to select this choice
    pub fn key(&self) -> u8 {
        match self {
            Self::AddExpense => 1,
            Self::ViewAll => 2,
            Self::ViewTotal => 3,
            Self::FilterByCategory => 4,
            Self::MonthlySummary => 5,
            Self::CategorySummary => 6,
            Self::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewAll => "View All Expenses",
            Self::ViewTotal => "View Total Expenses",
            Self::FilterByCategory => "Filter Expenses by Category",
            Self::MonthlySummary => "Monthly Expense Summary",
            Self::CategorySummary => "Category-wise Expense Summary",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| input == choice.key().to_string())
            .ok_or_else(|| ExpenseError::InvalidChoice(input.to_string()))
    }
}

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive loop over a tracker
pub struct Shell<'t, R, W> {
    tracker: &'t mut ExpenseTracker,
    input: R,
    output: W,
}

impl<'t, R: BufRead, W: Write> Shell<'t, R, W> {
    pub fn new(tracker: &'t mut ExpenseTracker, input: R, output: W) -> Self {
        Self {
            tracker,
            input,
            output,
        }
    }

    /// Run until the user exits or input is exhausted
    ///
    /// Only failures of the input/output streams are returned; every data
    /// error is printed and the loop continues.
    pub fn run(&mut self) -> ExpenseResult<()> {
        self.report_load_error()?;

        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                self.say_goodbye()?;
                return Ok(());
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<Flow> {
        match choice {
            MenuChoice::AddExpense => return self.add_expense(),
            MenuChoice::ViewAll => self.view_all()?,
            MenuChoice::ViewTotal => {
                writeln!(self.output, "{}", format_total(self.tracker.total()))?;
            }
            MenuChoice::FilterByCategory => return self.filter_by_category(),
            MenuChoice::MonthlySummary => {
                let summary = self.tracker.monthly_summary();
                self.print_summary(&summary)?;
            }
            MenuChoice::CategorySummary => {
                let summary = self.tracker.category_summary();
                self.print_summary(&summary)?;
            }
            MenuChoice::Exit => {
                self.say_goodbye()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn add_expense(&mut self) -> ExpenseResult<Flow> {
        let Some(amount) = self.prompt("Enter the amount: ")? else {
            return self.end_of_input();
        };
        let Some(category) =
            self.prompt("Enter the category (e.g., food, transportation, entertainment): ")?
        else {
            return self.end_of_input();
        };
        let Some(description) = self.prompt("Enter a description: ")? else {
            return self.end_of_input();
        };

        match self.tracker.add(&amount, &category, &description) {
            Ok(_) => writeln!(self.output, "Expense added successfully!")?,
            Err(e) if e.is_invalid_amount() => writeln!(self.output, "{}", e)?,
            Err(e) => {
                writeln!(self.output, "Error saving data: {}", e)?;
                writeln!(
                    self.output,
                    "The expense is kept for this session but was not written to disk."
                )?;
            }
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> ExpenseResult<()> {
        if self.tracker.is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
            return Ok(());
        }
        write!(self.output, "{}", format_expense_list(self.tracker.list_all()))?;
        Ok(())
    }

    fn filter_by_category(&mut self) -> ExpenseResult<Flow> {
        let Some(category) = self.prompt("Enter the category to filter by: ")? else {
            return self.end_of_input();
        };

        if self.tracker.is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
            return Ok(Flow::Continue);
        }

        let matches = self.tracker.filter_by_category(&category);
        if matches.is_empty() {
            writeln!(
                self.output,
                "No expenses found in the '{}' category.",
                category
            )?;
        } else {
            let numbered = matches.into_iter().enumerate().map(|(i, e)| (i + 1, e));
            write!(self.output, "{}", format_expense_list(numbered))?;
        }
        Ok(Flow::Continue)
    }

    fn print_summary(&mut self, summary: &Summary) -> ExpenseResult<()> {
        if summary.is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
        } else {
            write!(self.output, "{}", format_summary(summary))?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Expense Tracker")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn report_load_error(&mut self) -> ExpenseResult<()> {
        match self.tracker.load_error() {
            Some(e) if e.is_corrupted() => {
                writeln!(self.output, "Error loading data. The file might be corrupted.")?;
                writeln!(self.output, "  {}", e)?;
            }
            Some(e) => writeln!(self.output, "Error loading data: {}", e)?,
            None => {}
        }
        Ok(())
    }

    fn end_of_input(&mut self) -> ExpenseResult<Flow> {
        writeln!(self.output)?;
        self.say_goodbye()?;
        Ok(Flow::Exit)
    }

    fn say_goodbye(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "Exiting the Expense Tracker. Goodbye!")?;
        Ok(())
    }

    /// Print `label` and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ExpenseStore;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_tracker() -> (TempDir, ExpenseTracker) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, ExpenseTracker::open(store))
    }

    fn run_session(tracker: &mut ExpenseTracker, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(tracker, Cursor::new(input.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::AddExpense);
        assert_eq!(" 7 ".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!(matches!(
            "8".parse::<MenuChoice>(),
            Err(ExpenseError::InvalidChoice(_))
        ));
        assert!("".parse::<MenuChoice>().is_err());
        assert!("one".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_menu_lists_all_options() {
        let (_temp_dir, mut tracker) = create_test_tracker();
        let output = run_session(&mut tracker, "7\n");

        assert!(output.contains("Expense Tracker\n1. Add Expense\n2. View All Expenses\n"));
        assert!(output.contains("6. Category-wise Expense Summary\n7. Exit\n"));
        assert!(output.ends_with("Exiting the Expense Tracker. Goodbye!\n"));
    }

    #[test]
    fn test_add_and_report_session() {
        let (_temp_dir, mut tracker) = create_test_tracker();
        let output = run_session(
            &mut tracker,
            "1\n10.50\nfood\nlunch\n1\n5.00\ntransport\nbus\n3\n6\n4\nFOOD\n7\n",
        );

        assert_eq!(output.matches("Expense added successfully!").count(), 2);
        assert!(output.contains("Total Expenses: $15.50"));
        assert!(output.contains("food: $10.50\ntransport: $5.00\n"));
        assert!(output.contains("Enter the category to filter by: 1. "));
        assert!(output.contains(" - food: $10.50 - lunch\n"));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_invalid_amount_is_reported() {
        let (temp_dir, mut tracker) = create_test_tracker();
        let output = run_session(&mut tracker, "1\n-5\nfood\nrefund\n1\nabc\nfood\nx\n7\n");

        assert!(output.contains("Invalid amount: Amount should be greater than zero."));
        assert!(output.contains("Invalid amount: could not convert 'abc' to a number"));
        assert!(tracker.is_empty());
        assert!(!temp_dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_temp_dir, mut tracker) = create_test_tracker();
        let output = run_session(&mut tracker, "9\nhello\n7\n");

        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(output.matches("Choose an option: ").count(), 3);
    }

    #[test]
    fn test_empty_views() {
        let (_temp_dir, mut tracker) = create_test_tracker();
        let output = run_session(&mut tracker, "2\n3\n4\nfood\n7\n");

        assert!(output.contains("No expenses recorded."));
        assert!(output.contains("Total Expenses: $0.00"));
        assert!(!output.contains("No expenses found"));
    }

    #[test]
    fn test_filter_without_match_is_distinct() {
        let (_temp_dir, mut tracker) = create_test_tracker();
        let output = run_session(&mut tracker, "1\n3\nfood\nsnack\n4\ntravel\n7\n");

        assert!(output.contains("No expenses found in the 'travel' category."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, mut tracker) = create_test_tracker();
        let output = run_session(&mut tracker, "3\n");
        assert!(output.ends_with("Exiting the Expense Tracker. Goodbye!\n"));

        let output = run_session(&mut tracker, "1\n12\n");
        assert!(output.ends_with("Exiting the Expense Tracker. Goodbye!\n"));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_corrupted_store_is_reported_at_start() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "not json").unwrap();
        let mut tracker = ExpenseTracker::open(ExpenseStore::new(&path));

        let output = run_session(&mut tracker, "2\n7\n");

        assert!(output.starts_with("Error loading data. The file might be corrupted.\n"));
        assert!(output.contains("No expenses recorded."));
    }

    #[test]
    fn test_description_keeps_inner_whitespace() {
        let (_temp_dir, mut tracker) = create_test_tracker();
        run_session(&mut tracker, "1\n2\nfood\r\n  two  words \r\n7\n");

        let expense = &tracker.expenses()[0];
        assert_eq!(expense.category(), "food");
        assert_eq!(expense.description(), "  two  words ");
    }
}
