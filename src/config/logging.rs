//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so they never interleave with
//! the menu text on stdout. `RUST_LOG` takes precedence over `-v` flags.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ExpenseError, ExpenseResult};

/// Filter directive for a `-v` count
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "expense_tracker=warn",
        1 => "expense_tracker=info",
        _ => "expense_tracker=debug",
    }
}

/// Install the global tracing subscriber
pub fn init_logging(verbosity: u8) -> ExpenseResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| ExpenseError::Config(format!("Failed to initialize logging: {}", e)))
}
