//! # Shared Data Transfer Objects Library
//!
//! This library defines the records exchanged between the swap views and the
//! application that hosts them. All DTOs derive `serde` traits so they can be
//! logged as JSON or handed to a real chain-data provider later.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::swap`]**: Token descriptors and the transaction summary passed
//!     into the confirmation modal
//!   - **[`dto::market`]**: Price history points for the market chart
//! - **[`utils`]**: Display formatting helpers
//!   - **[`utils::format_amount`]**: Fixed-decimal amount formatting
//!   - **[`utils::format_percent`]**: Percentage formatting
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::swap::TransactionSummary;
//! use shared::utils::format_percent;
//!
//! let summary = TransactionSummary {
//!     from_symbol: "ETH".to_string(),
//!     to_symbol: "USDC".to_string(),
//!     from_amount: "0.5".to_string(),
//!     to_amount: "1224.02".to_string(),
//!     price_impact: 0.1,
//!     rpc_active: true,
//!     balance: 1.4502,
//! };
//!
//! assert_eq!(format_percent(summary.price_impact), "0.10%");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
