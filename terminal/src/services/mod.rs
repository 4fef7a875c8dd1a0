//! # Services Module
//!
//! Implementations of [`MarketDataProvider`](crate::core::service::MarketDataProvider).
//!
//! ```text
//! services/
//! └── mock.rs    - Constant balance/price with simulated node latency
//! ```
//!
//! ## Service Interaction Pattern
//!
//! ```text
//! 1. App starts
//!    └─> tasks::sync::sync_view() ──> provider.balance() / quote() / price_history()
//!                                 ──> provider.check_liveness() (simulated delay)
//!
//! 2. Results arrive on the UI thread
//!    └─> AppEvent::ViewDataLoaded / ViewDataFailed ──> form balance and price
//!    └─> AppEvent::RpcStatusChanged               ──> form rpc status
//! ```
//!
//! There is no retry and no backoff: a failed sync leaves the view marked
//! down, which keeps the action gate closed.

pub mod mock;
