//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::app::state::{RpcStatus, ViewKind};
use shared::dto::market::PricePoint;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Balance and quote for a view's form
    ViewDataLoaded {
        view: ViewKind,
        balance: f64,
        price: f64,
    },
    /// Provider lookups for a view failed
    ViewDataFailed { view: ViewKind, error: String },
    /// Chart series for the market view
    HistoryLoaded(Result<Vec<PricePoint>, String>),
    /// Simulated node sync finished (or failed)
    RpcStatusChanged { view: ViewKind, status: RpcStatus },
    /// Hold-to-confirm timer tick, stamped with the timer generation
    HoldTick { generation: u64 },
}
