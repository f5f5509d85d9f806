use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use expense_tracker::cli::{handle_export_command, ExportArgs, Shell};
use expense_tracker::config::{init_logging, ExpensePaths};
use expense_tracker::services::ExpenseTracker;
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense log with monthly and category summaries",
    long_about = "Records expenses with a category, description and timestamp in a \
                  local JSON file. Without a command it opens the interactive menu."
)]
struct Cli {
    /// Data file (defaults to $EXPENSE_TRACKER_DATA_FILE, then ./expenses.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Export all expenses
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let paths = cli
        .data_file
        .map(ExpensePaths::with_data_file)
        .unwrap_or_else(ExpensePaths::new);
    debug!(data_file = %paths.data_file().display(), "resolved data file");

    let store = ExpenseStore::new(paths.data_file());

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut tracker = ExpenseTracker::open(store);
            let stdin = io::stdin();
            Shell::new(&mut tracker, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Export(args) => {
            let expenses = store.load()?;
            handle_export_command(&expenses, args)?;
        }
    }

    Ok(())
}
