//! # Core Abstractions
//!
//! Core traits, errors and configuration shared across the terminal.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The injected market data provider trait
//! - **[`config`]**: Persisted terminal settings
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use swap_terminal::core::service::MarketDataProvider;
//! use swap_terminal::services::mock::MockMarketProvider;
//!
//! // Constants served after a simulated delay
//! let provider: Arc<dyn MarketDataProvider> = Arc::new(MockMarketProvider::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::TerminalConfig;
pub use error::{AppError, Result};
pub use service::MarketDataProvider;
