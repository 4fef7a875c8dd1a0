//! # Data Transfer Objects (DTOs)
//!
//! Records exchanged between the swap views and their host.
//!
//! ## Module Organization
//!
//! - [`swap`] - Token descriptors and the confirmation-modal transaction summary
//! - [`market`] - Price history points for charting
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "from_symbol": "ETH",
//!   "to_symbol": "USDC",
//!   "from_amount": "0.5",
//!   "to_amount": "1224.02",
//!   "price_impact": 0.1,
//!   "rpc_active": true,
//!   "balance": 1.4502
//! }
//! ```

pub mod market;
pub mod swap;

pub use market::*;
pub use swap::*;
