//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`runtime`]**: Process-wide Tokio runtime entered by the binary
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate amount and percent formatting
//! - [`crate::guard`]: Amount parsing and clamping

pub mod runtime;
