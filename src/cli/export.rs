//! CLI command for data export
//!
//! Writes every expense to a file or stdout in the chosen format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::models::Expense;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    #[default]
    Csv,
    /// JSON, same layout as the data file
    Json,
    /// YAML, human-readable
    Yaml,
}

/// Arguments of the `export` command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(expenses: &[Expense], args: ExportArgs) -> ExpenseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(expenses, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;

            info!(path = %path.display(), count = expenses.len(), "exported expenses");
            println!("Exported {} expenses to {}", expenses.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(expenses, args.format, &mut handle)?;
        }
    }

    Ok(())
}

/// Write all expenses in `format`
pub fn write_export<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer),
        ExportFormat::Yaml => export_expenses_yaml(expenses, writer),
    }
}
