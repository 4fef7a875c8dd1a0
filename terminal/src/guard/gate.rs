//! # Action Gate
//!
//! Decides whether the primary swap action is enabled and which label it shows.
//!
//! The action is disabled when ANY of these hold:
//! - the network is still loading (RPC not live)
//! - price impact exceeds [`HIGH_IMPACT_THRESHOLD_PCT`](super::impact::HIGH_IMPACT_THRESHOLD_PCT)
//! - the amount is empty, unparseable or `<= 0`
//! - the amount exceeds the balance
//!
//! Labels follow a priority order where the first matching condition wins:
//! loading, then high impact, then the view's default text.

use super::impact::is_high_impact;
use super::input::is_positive_amount;

/// Label-selecting status of the primary action, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// Waiting on the node; shows the syncing text
    Syncing,
    /// Impact over threshold; shows the impact warning text
    ImpactTooHigh,
    /// Amount missing, non-positive or over balance; default text, disabled
    Blocked,
    /// All checks pass
    Ready,
}

impl GateStatus {
    pub fn is_enabled(self) -> bool {
        self == GateStatus::Ready
    }
}

/// Inputs to the gate for one render.
#[derive(Debug, Clone, Copy)]
pub struct ActionGate<'a> {
    pub loading: bool,
    pub impact_pct: f64,
    pub amount: &'a str,
    pub balance_exceeded: bool,
}

impl<'a> ActionGate<'a> {
    pub fn new(loading: bool, impact_pct: f64, amount: &'a str, balance_exceeded: bool) -> Self {
        Self {
            loading,
            impact_pct,
            amount,
            balance_exceeded,
        }
    }

    pub fn status(&self) -> GateStatus {
        if self.loading {
            GateStatus::Syncing
        } else if is_high_impact(self.impact_pct) {
            GateStatus::ImpactTooHigh
        } else if !is_positive_amount(self.amount) || self.balance_exceeded {
            GateStatus::Blocked
        } else {
            GateStatus::Ready
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status().is_enabled()
    }
}

/// Free-function form of [`ActionGate::is_enabled`].
pub fn is_action_enabled(loading: bool, impact_pct: f64, amount: &str, balance_exceeded: bool) -> bool {
    ActionGate::new(loading, impact_pct, amount, balance_exceeded).is_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::impact::estimate_impact;

    #[test]
    fn test_loading_takes_precedence() {
        for impact in [0.0, 1.2, 9.0] {
            for amount in ["", "0", "0.5", "abc"] {
                for exceeded in [false, true] {
                    let gate = ActionGate::new(true, impact, amount, exceeded);
                    assert!(!gate.is_enabled());
                    assert_eq!(gate.status(), GateStatus::Syncing);
                }
            }
        }
    }

    #[test]
    fn test_high_impact_beats_invalid_amount() {
        let gate = ActionGate::new(false, 7.5, "", false);
        assert_eq!(gate.status(), GateStatus::ImpactTooHigh);
        assert!(!gate.is_enabled());
    }

    #[test]
    fn test_invalid_amounts_block() {
        for amount in ["", "0", "-1", "abc"] {
            assert_eq!(ActionGate::new(false, 0.0, amount, false).status(), GateStatus::Blocked);
        }
    }

    #[test]
    fn test_balance_exceeded_blocks() {
        assert_eq!(ActionGate::new(false, 0.0, "0.5", true).status(), GateStatus::Blocked);
    }

    #[test]
    fn test_amount_six_enables_gate() {
        let impact = estimate_impact(6.0);
        assert!((impact - 1.2).abs() < 1e-12);
        assert!(is_action_enabled(false, impact, "6", false));
    }
}
