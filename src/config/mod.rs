//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Data file resolution (flag, environment, default)
//! - Log filter setup

pub mod logging;
pub mod paths;

pub use logging::init_logging;
pub use paths::ExpensePaths;
