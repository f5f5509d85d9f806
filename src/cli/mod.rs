//! CLI module
//!
//! The interactive menu shell and the one-shot export command.

pub mod export;
pub mod menu;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use menu::{MenuChoice, Shell};
