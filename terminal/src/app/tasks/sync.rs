//! # View Sync Task
//!
//! Loads a view's balance and quote, then waits on the provider's liveness
//! check. The gate stays in its syncing state until the liveness answer lands.

use crate::app::events::AppEvent;
use crate::app::state::{RpcStatus, ViewKind};
use crate::core::error::Result;
use crate::core::service::MarketDataProvider;
use async_channel::Sender;
use std::sync::Arc;
use tokio::spawn;
use tokio::task::JoinHandle;

/// Spawn the sync for one view.
///
/// Internal task function - spawns async task and reports through the event channel.
pub(crate) fn sync_view(
    view: ViewKind,
    provider: Arc<dyn MarketDataProvider>,
    from_symbol: String,
    to_symbol: String,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    spawn(async move {
        run_sync(view, provider.as_ref(), &from_symbol, &to_symbol, &event_tx).await;
    })
}

async fn run_sync(
    view: ViewKind,
    provider: &dyn MarketDataProvider,
    from_symbol: &str,
    to_symbol: &str,
    event_tx: &Sender<AppEvent>,
) {
    match load_view_data(provider, from_symbol, to_symbol).await {
        Ok((balance, price)) => {
            tracing::debug!(?view, balance, price, "View data loaded");
            let _ = event_tx.send(AppEvent::ViewDataLoaded { view, balance, price }).await;
        }
        Err(e) => {
            tracing::error!(?view, error = %e, "Failed to load view data");
            let _ = event_tx
                .send(AppEvent::ViewDataFailed { view, error: e.to_string() })
                .await;
        }
    }

    if view == ViewKind::Market {
        let history = provider
            .price_history(from_symbol)
            .await
            .map_err(|e| e.to_string());
        if let Err(e) = &history {
            tracing::warn!(error = %e, "Price history unavailable");
        }
        let _ = event_tx.send(AppEvent::HistoryLoaded(history)).await;
    }

    let status = match provider.check_liveness().await {
        Ok(true) => RpcStatus::Live,
        Ok(false) => RpcStatus::Down("node reported unhealthy".to_string()),
        Err(e) => RpcStatus::Down(e.to_string()),
    };
    tracing::info!(?view, ?status, "Node sync finished");
    let _ = event_tx.send(AppEvent::RpcStatusChanged { view, status }).await;
}

async fn load_view_data(
    provider: &dyn MarketDataProvider,
    from_symbol: &str,
    to_symbol: &str,
) -> Result<(f64, f64)> {
    let balance = provider.balance(from_symbol).await?;
    let price = provider.quote(from_symbol, to_symbol).await?;
    Ok((balance, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::MockMarketProvider;
    use async_channel::unbounded;

    async fn collect(view: ViewKind, provider: MockMarketProvider, from: &str) -> Vec<AppEvent> {
        let (tx, rx) = unbounded();
        sync_view(view, Arc::new(provider), from.to_string(), "USDC".to_string(), tx)
            .await
            .unwrap();
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_terminal_sync_loads_data_then_goes_live() {
        let events = collect(ViewKind::Terminal, MockMarketProvider::default(), "ETH").await;
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            AppEvent::ViewDataLoaded { view: ViewKind::Terminal, balance, price }
                if balance == 1.4502 && price == 2450.50
        ));
        assert!(matches!(
            &events[1],
            AppEvent::RpcStatusChanged { view: ViewKind::Terminal, status: RpcStatus::Live }
        ));
    }

    #[tokio::test]
    async fn test_market_sync_includes_history() {
        let events = collect(ViewKind::Market, MockMarketProvider::default(), "ETH").await;
        assert_eq!(events.len(), 3);
        match &events[1] {
            AppEvent::HistoryLoaded(Ok(points)) => assert_eq!(points.len(), 60),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_offline_provider_marks_view_down() {
        let events = collect(ViewKind::Terminal, MockMarketProvider::default().offline(), "ETH").await;
        assert!(matches!(
            events.last(),
            Some(AppEvent::RpcStatusChanged { status: RpcStatus::Down(_), .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_symbol_reports_failure() {
        let events = collect(ViewKind::Terminal, MockMarketProvider::default(), "DOGE").await;
        assert!(matches!(events[0], AppEvent::ViewDataFailed { view: ViewKind::Terminal, .. }));
    }
}
