//! # Debugging and Tracing Infrastructure
//!
//! File-based structured logging for the swap terminal.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/swap-terminal.log.<date>` (daily rotation)
//! - **JSON output**: one object per line for log shippers
//! - **Panic logging**: location, message and backtrace go to the log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup
//! swap_terminal::debug::init();
//!
//! // Log with structured fields
//! tracing::info!(view = "terminal", balance = 1.4502, "View data loaded");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `swap_terminal=info,warn`)
//! - `TERMINAL_LOG_DIR`: Log directory (default `logs`)
//! - `TERMINAL_LOG_FORMAT`: `json` for JSON lines, plain text otherwise

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::{init as init_logger, LoggerInit};

/// Initialize the debugging system
///
/// Call this at application startup, before any other operations.
pub fn init() {
    let outcome = init_logger();
    tracing::debug!(?outcome, "Logging ready");
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
