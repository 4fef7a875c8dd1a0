//! Simulated price impact.
//!
//! This is a placeholder model used only to drive UI warnings, not AMM math.
//! Every view uses [`estimate_impact`] so the same amount always reports the
//! same risk.

/// Impact above this percentage is "high" and blocks the primary action.
pub const HIGH_IMPACT_THRESHOLD_PCT: f64 = 5.0;

/// Amount whose impact fraction reaches 1.0 (100%).
pub const IMPACT_DIVISOR: f64 = 500.0;

/// Estimated price impact in percent for `amount`.
///
/// The impact fraction is `amount / 500`, reported in percent, so an amount
/// of 6 estimates to 1.2%. Non-finite and non-positive amounts estimate to `0.0`.
pub fn estimate_impact(amount: f64) -> f64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0.0;
    }
    amount / IMPACT_DIVISOR * 100.0
}

/// Whether `impact_pct` exceeds [`HIGH_IMPACT_THRESHOLD_PCT`].
pub fn is_high_impact(impact_pct: f64) -> bool {
    impact_pct > HIGH_IMPACT_THRESHOLD_PCT
}

/// Estimated receive amount after impact, `None` when there is no estimate.
pub fn estimate_output(amount: f64, price: f64, impact_pct: f64) -> Option<f64> {
    let output = amount * price * (1.0 - impact_pct / 100.0);
    if output.is_nan() {
        None
    } else {
        Some(output)
    }
}

/// Width of the impact meter, `impact * 10` percent capped at full.
pub fn impact_bar_fraction(impact_pct: f64) -> f32 {
    ((impact_pct * 10.0).clamp(0.0, 100.0) / 100.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_impact_linear() {
        assert!((estimate_impact(6.0) - 1.2).abs() < 1e-12);
        assert!((estimate_impact(25.0) - 5.0).abs() < 1e-12);
        assert!((estimate_impact(1.4502) - 0.29004).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_impact_degenerate_amounts() {
        assert_eq!(estimate_impact(0.0), 0.0);
        assert_eq!(estimate_impact(-4.0), 0.0);
        assert_eq!(estimate_impact(f64::NAN), 0.0);
        assert_eq!(estimate_impact(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_high_impact_threshold_is_exclusive() {
        assert!(!is_high_impact(5.0));
        assert!(is_high_impact(5.01));
        assert!(!is_high_impact(estimate_impact(6.0)));
    }

    #[test]
    fn test_estimate_output() {
        let out = estimate_output(1.0, 2450.5, 0.0).unwrap();
        assert!((out - 2450.5).abs() < 1e-9);

        let out = estimate_output(1.0, 100.0, 10.0).unwrap();
        assert!((out - 90.0).abs() < 1e-9);

        assert_eq!(estimate_output(f64::NAN, 2450.5, 0.0), None);
    }

    #[test]
    fn test_impact_bar_fraction() {
        assert_eq!(impact_bar_fraction(0.0), 0.0);
        assert!((impact_bar_fraction(2.5) - 0.25).abs() < 1e-6);
        assert_eq!(impact_bar_fraction(50.0), 1.0);
    }
}
