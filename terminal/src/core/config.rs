//! Terminal settings persisted as JSON next to the binary.

use crate::core::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Slippage presets offered by the selector, in basis points
pub const SLIPPAGE_OPTIONS: &[u16] = &[
    10,  // 0.1%
    50,  // 0.5%
    100, // 1.0%
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Slippage tolerance shown in the terminal (displayed, not enforced)
    pub slippage_bps: u16,
    /// Simulated node sync delay for the swap terminal
    pub terminal_rpc_delay_ms: u64,
    /// Simulated node sync delay for the market view
    pub market_rpc_delay_ms: u64,
    /// Mock sell-side balance
    pub mock_balance: f64,
    /// Mock ETH/USDC price
    pub mock_price: f64,
    /// Number of points in the generated price history
    pub history_points: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            slippage_bps: 50,
            terminal_rpc_delay_ms: 2000,
            market_rpc_delay_ms: 1500,
            mock_balance: 1.4502,
            mock_price: 2450.50,
            history_points: 60,
        }
    }
}

impl TerminalConfig {
    /// Load from a JSON file; a missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: TerminalConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mock_balance.is_finite() || self.mock_balance < 0.0 {
            return Err(AppError::Validation(format!(
                "mock_balance must be a non-negative number, got {}",
                self.mock_balance
            )));
        }
        if !self.mock_price.is_finite() || self.mock_price <= 0.0 {
            return Err(AppError::Validation(format!(
                "mock_price must be positive, got {}",
                self.mock_price
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("swap-terminal-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = TerminalConfig::load_from_file(&temp_path("missing")).unwrap();
        assert_eq!(config, TerminalConfig::default());
        assert_eq!(config.slippage_bps, 50);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let config = TerminalConfig {
            slippage_bps: 100,
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();
        let loaded = TerminalConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.slippage_bps, 100);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, r#"{ "terminal_rpc_delay_ms": 10 }"#).unwrap();
        let loaded = TerminalConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.terminal_rpc_delay_ms, 10);
        assert_eq!(loaded.mock_balance, 1.4502);
    }

    #[test]
    fn test_negative_balance_rejected() {
        let config = TerminalConfig {
            mock_balance: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }
}
