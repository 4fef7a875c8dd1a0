//! Swap DTOs: token descriptors and the confirmation summary.

use serde::{Deserialize, Serialize};

/// Token shown in a swap panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub symbol: String,
    pub name: String,
    /// RGB badge colour drawn next to the symbol
    pub icon_color: [u8; 3],
}

impl TokenDescriptor {
    pub fn new(symbol: &str, name: &str, icon_color: [u8; 3]) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            icon_color,
        }
    }

    /// Ether, the sell side of the demo pair
    pub fn eth() -> Self {
        Self::new("ETH", "Ether", [59, 130, 246])
    }

    /// USD Coin, the receive side of the demo pair
    pub fn usdc() -> Self {
        Self::new("USDC", "USD Coin", [16, 185, 129])
    }
}

/// Transaction summary handed to the confirmation modal.
///
/// `from_amount` and `to_amount` are kept as the exact strings the user saw in
/// the form so the modal never re-formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_amount: String,
    pub to_amount: String,
    /// Estimated price impact in percent
    pub price_impact: f64,
    /// Whether the node connection is currently usable
    pub rpc_active: bool,
    /// Sell-side balance at the time the summary was built
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_summary_json_field_names() {
        let summary = TransactionSummary {
            from_symbol: "ETH".to_string(),
            to_symbol: "USDC".to_string(),
            from_amount: "0.5".to_string(),
            to_amount: "1224.02".to_string(),
            price_impact: 0.1,
            rpc_active: true,
            balance: 1.4502,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["from_symbol"], "ETH");
        assert_eq!(json["rpc_active"], true);
        assert_eq!(json["balance"], 1.4502);
    }

    #[test]
    fn test_demo_pair_symbols() {
        assert_eq!(TokenDescriptor::eth().symbol, "ETH");
        assert_eq!(TokenDescriptor::usdc().symbol, "USDC");
        assert_ne!(TokenDescriptor::eth().icon_color, TokenDescriptor::usdc().icon_color);
    }
}
