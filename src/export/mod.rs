//! Export module for the expense tracker
//!
//! Writes the full expense list in several formats:
//! - CSV: spreadsheet-compatible, amounts rounded to cents
//! - JSON: same layout as the data file
//! - YAML: human-readable backup

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::export_expenses_json;
pub use self::yaml::export_expenses_yaml;
