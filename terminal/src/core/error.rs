//! # Common Error Types
//!
//! Consolidated error handling for the swap terminal.
//!
//! Invalid user input is never an error here: the guards in [`crate::guard`]
//! silently correct it. [`AppError`] covers the infrastructure around them.
//!
//! ## Error Categories
//!
//! - **Provider**: Market data provider failures (balance, quote, liveness, history)
//! - **State**: Application state management errors (invalid transitions)
//! - **Validation**: Programmer-facing validation failures (e.g. bad config values)
//! - **Config**: Settings file read/write/parse failures
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use swap_terminal::core::error::{AppError, Result};
//!
//! fn require_live(live: bool) -> Result<()> {
//!     if !live {
//!         return Err(AppError::Provider("node connection unstable".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use swap_terminal::core::error::AppError;
///
/// let err = AppError::Provider("liveness check timed out".to_string());
/// assert_eq!(err.to_string(), "Provider error: liveness check timed out");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Market data provider failure.
    ///
    /// Raised by [`crate::core::service::MarketDataProvider`] implementations
    /// when a balance, quote, liveness or history lookup fails.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),

    /// Validation error for values that cannot be silently corrected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Settings file error.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
