//! # Mock Market Provider
//!
//! Serves constant balances and prices after a simulated node delay. Stands in
//! for a wallet/chain client until one exists.

use crate::core::config::TerminalConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::MarketDataProvider;
use async_trait::async_trait;
use rand::Rng;
use shared::dto::market::PricePoint;
use std::time::Duration;

/// Symbol whose balance and price the mock knows about
pub const MOCK_SYMBOL: &str = "ETH";

#[derive(Debug, Clone)]
pub struct MockMarketProvider {
    pub balance: f64,
    pub price: f64,
    /// Delay before the liveness check answers
    pub latency: Duration,
    /// Answer of the liveness check
    pub live: bool,
    pub history_points: usize,
}

impl Default for MockMarketProvider {
    fn default() -> Self {
        Self::from_config(&TerminalConfig::default(), Duration::ZERO)
    }
}

impl MockMarketProvider {
    pub fn from_config(config: &TerminalConfig, latency: Duration) -> Self {
        Self {
            balance: config.mock_balance,
            price: config.mock_price,
            latency,
            live: true,
            history_points: config.history_points,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn offline(mut self) -> Self {
        self.live = false;
        self
    }

    /// Random walk ending near the mock price, one point per minute.
    fn generate_history(&self) -> Vec<PricePoint> {
        let mut rng = rand::rng();
        let now = chrono::Utc::now();
        let count = self.history_points;

        let mut value = self.price * 0.97;
        let mut points = Vec::with_capacity(count);
        for i in 0..count {
            let minutes_ago = (count - i - 1) as i64;
            let drift = (self.price - value) * 0.05;
            value += drift + rng.random_range(-0.004..0.004) * self.price;
            value = value.clamp(self.price * 0.8, self.price * 1.2);
            points.push(PricePoint::new(now - chrono::Duration::minutes(minutes_ago), value));
        }
        points
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketProvider {
    async fn balance(&self, symbol: &str) -> Result<f64> {
        if symbol != MOCK_SYMBOL {
            return Err(AppError::Provider(format!("no balance for {symbol}")));
        }
        Ok(self.balance)
    }

    async fn quote(&self, from: &str, to: &str) -> Result<f64> {
        match (from, to) {
            ("ETH", "USDC") => Ok(self.price),
            ("USDC", "ETH") => Ok(1.0 / self.price),
            _ => Err(AppError::Provider(format!("no quote for {from}/{to}"))),
        }
    }

    async fn check_liveness(&self) -> Result<bool> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        tracing::debug!(latency_ms = self.latency.as_millis() as u64, live = self.live, "Mock liveness check answered");
        Ok(self.live)
    }

    async fn price_history(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        if symbol != MOCK_SYMBOL {
            return Err(AppError::Provider(format!("no history for {symbol}")));
        }
        Ok(self.generate_history())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_constants() {
        let provider = MockMarketProvider::default();
        assert_eq!(provider.balance("ETH").await.unwrap(), 1.4502);
        assert_eq!(provider.quote("ETH", "USDC").await.unwrap(), 2450.50);
        assert!(provider.check_liveness().await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_provider_error() {
        let provider = MockMarketProvider::default();
        assert!(matches!(provider.balance("BTC").await, Err(AppError::Provider(_))));
        assert!(matches!(provider.quote("BTC", "USDC").await, Err(AppError::Provider(_))));
    }

    #[tokio::test]
    async fn test_offline_reports_not_live() {
        let provider = MockMarketProvider::default().offline();
        assert!(!provider.check_liveness().await.unwrap());
    }

    #[tokio::test]
    async fn test_liveness_waits_for_latency() {
        let provider = MockMarketProvider::default().with_latency(Duration::from_millis(40));
        let start = tokio::time::Instant::now();
        provider.check_liveness().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_history_is_bounded_and_ordered() {
        let provider = MockMarketProvider::default();
        let history = provider.price_history("ETH").await.unwrap();
        assert_eq!(history.len(), 60);
        assert!(history.windows(2).all(|w| w[0].time < w[1].time));
        assert!(history.iter().all(|p| p.value >= 2450.5 * 0.8 && p.value <= 2450.5 * 1.2));
    }
}
