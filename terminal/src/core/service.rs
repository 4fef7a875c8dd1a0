//! # Service Traits
//!
//! The chain-data provider seam. Views never talk to a provider directly; the
//! tasks in `app::tasks` call it and report results over the event channel.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::dto::market::PricePoint;

/// Balance, quote and liveness lookups for the swap views.
///
/// The only implementation shipped is
/// [`MockMarketProvider`](crate::services::mock::MockMarketProvider), which
/// serves constants after a simulated delay. A real wallet/chain client would
/// implement this trait and be injected into [`crate::app::App::with_provider`].
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Sell-side balance of `symbol` held by the user
    async fn balance(&self, symbol: &str) -> Result<f64>;

    /// Price of one `from` unit in `to` units
    async fn quote(&self, from: &str, to: &str) -> Result<f64>;

    /// Whether the node connection is usable
    async fn check_liveness(&self) -> Result<bool>;

    /// Recent price history of `symbol` for charting
    async fn price_history(&self, symbol: &str) -> Result<Vec<PricePoint>>;
}
