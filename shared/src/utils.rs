//! # Shared Utility Functions
//!
//! Display formatting used by every swap view.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_amount, format_percent};
//!
//! assert_eq!(format_amount(1.4502, 4), "1.4502");
//! assert_eq!(format_percent(1.2), "1.20%");
//! ```

/// Format an amount with a fixed number of decimals.
///
/// Non-finite values render as an empty string so a NaN estimate shows as a
/// blank field instead of `"NaN"`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(1224.2654, 2), "1224.27");
/// assert_eq!(format_amount(f64::NAN, 2), "");
/// ```
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{:.*}", decimals, value)
}

/// Format a percentage with two decimals and a `%` suffix.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Convert slippage basis points to a percentage string.
///
/// ```rust
/// use shared::utils::bps_to_percent_str;
///
/// assert_eq!(bps_to_percent_str(50), "0.5%");
/// assert_eq!(bps_to_percent_str(100), "1%");
/// ```
pub fn bps_to_percent_str(bps: u16) -> String {
    format!("{}%", bps as f64 / 100.0)
}
