//! Input guard for typed swap amounts.

/// Outcome of running a raw keystroke through the balance guard.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitized {
    /// Input was emptied; the amount and everything derived from it clear.
    Cleared,
    /// Negative input; the previous amount stays.
    Rejected,
    /// Input was within `[0, balance]` (or not a number) and is kept as typed.
    Accepted(String),
    /// Input exceeded the balance and was replaced by the balance.
    Clamped(String),
}

impl Sanitized {
    /// Resolve to the string the amount field should hold next.
    pub fn resolve(self, previous: &str) -> String {
        match self {
            Sanitized::Cleared => String::new(),
            Sanitized::Rejected => previous.to_string(),
            Sanitized::Accepted(value) | Sanitized::Clamped(value) => value,
        }
    }

    /// Whether applying this outcome changes the stored amount.
    pub fn changes_state(&self) -> bool {
        !matches!(self, Sanitized::Rejected)
    }
}

/// Parse an amount string. Unparseable text yields NaN.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Clamp `raw` against `balance`.
///
/// Over-balance input is replaced by `balance.to_string()`; it is a hard clamp,
/// not a warning. NaN compares false on both bounds and passes through
/// untouched so derived estimates can report "no estimate".
pub fn sanitize_amount(raw: &str, balance: f64) -> Sanitized {
    if raw.is_empty() {
        return Sanitized::Cleared;
    }

    let value = parse_amount(raw);
    if value < 0.0 {
        tracing::trace!(raw, "Rejected negative amount");
        return Sanitized::Rejected;
    }

    if value > balance {
        tracing::debug!(raw, balance, "Clamped amount to balance");
        return Sanitized::Clamped(balance.to_string());
    }

    Sanitized::Accepted(raw.to_string())
}

/// Whether `amount` parses to a finite value strictly above zero.
pub fn is_positive_amount(amount: &str) -> bool {
    let value = parse_amount(amount);
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BALANCE: f64 = 1.4502;

    #[test]
    fn test_empty_input_clears() {
        assert_eq!(sanitize_amount("", BALANCE), Sanitized::Cleared);
        assert_eq!(sanitize_amount("", 0.0).resolve("0.3"), "");
    }

    #[test]
    fn test_over_balance_is_clamped() {
        let out = sanitize_amount("2", BALANCE);
        assert_eq!(out, Sanitized::Clamped("1.4502".to_string()));
        assert_eq!(out.resolve(""), "1.4502");
    }

    #[test]
    fn test_negative_is_rejected_and_previous_kept() {
        let out = sanitize_amount("-1", BALANCE);
        assert_eq!(out, Sanitized::Rejected);
        assert!(!out.changes_state());
        assert_eq!(out.resolve("0.25"), "0.25");
    }

    #[test]
    fn test_in_range_input_unchanged() {
        assert_eq!(sanitize_amount("0.5", BALANCE), Sanitized::Accepted("0.5".to_string()));
        assert_eq!(sanitize_amount("1.4502", BALANCE).resolve(""), "1.4502");
        assert_eq!(sanitize_amount("0", BALANCE).resolve(""), "0");
    }

    #[test]
    fn test_malformed_text_does_not_panic() {
        let out = sanitize_amount("abc", BALANCE);
        assert_eq!(out, Sanitized::Accepted("abc".to_string()));
        assert!(parse_amount("abc").is_nan());
        assert!(!is_positive_amount("abc"));
    }

    #[test]
    fn test_sanitized_value_never_leaves_bounds() {
        let inputs = ["", "0", "0.1", "1.4502", "1.4503", "2", "1e9", "-0.5", "-1e9", "inf", "-inf", "x"];
        for balance in [0.0, 0.5, BALANCE, 1000.0] {
            for raw in inputs {
                let resolved = sanitize_amount(raw, balance).resolve("");
                let value = parse_amount(&resolved);
                assert!(!(value > balance), "{raw} -> {resolved} exceeds {balance}");
                assert!(!(value < 0.0), "{raw} -> {resolved} is negative");
            }
        }
    }

    fn amount_text() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<String>(),
            "[+-]?[0-9]{0,13}(\\.[0-9]{0,10})?([eE][+-]?[0-9]{1,3})?",
            Just("NaN".to_string()),
            Just("-inf".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn prop_resolved_amount_stays_within_balance(
            raw in amount_text(),
            previous in "[0-9]{0,3}(\\.[0-9]{0,4})?",
            balance in 0.0f64..1e12,
        ) {
            // previous amount went through the same guard
            let previous = sanitize_amount(&previous, balance).resolve("");
            let resolved = sanitize_amount(&raw, balance).resolve(&previous);
            let value = parse_amount(&resolved);
            prop_assert!(!(value > balance), "{:?} -> {:?} exceeds {}", raw, resolved, balance);
            prop_assert!(!(value < 0.0), "{:?} -> {:?} is negative", raw, resolved);
        }

        #[test]
        fn prop_empty_input_always_clears(balance in 0.0f64..1e12, previous in "[0-9.]{0,8}") {
            prop_assert_eq!(sanitize_amount("", balance), Sanitized::Cleared);
            prop_assert_eq!(sanitize_amount("", balance).resolve(&previous), "");
        }
    }

    #[test]
    fn test_is_positive_amount() {
        assert!(is_positive_amount("0.5"));
        assert!(is_positive_amount(" 2 "));
        assert!(!is_positive_amount(""));
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount("-3"));
    }
}
