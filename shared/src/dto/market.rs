//! Market data DTOs used by the price chart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point of an area/line price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Sample time
    pub time: DateTime<Utc>,
    /// Price in quote currency
    pub value: f64,
}

impl PricePoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

/// Min/max of a series with 5% padding, `(0, 100)` when empty.
pub fn value_range(points: &[PricePoint]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 100.0);
    }

    let (min, max) = points.iter().fold((f64::MAX, f64::MIN), |(min, max), p| {
        (min.min(p.value), max.max(p.value))
    });

    let padding = (max - min) * 0.05;
    (min - padding, max + padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_empty() {
        assert_eq!(value_range(&[]), (0.0, 100.0));
    }

    #[test]
    fn test_value_range_pads_five_percent() {
        let now = Utc::now();
        let points = vec![PricePoint::new(now, 100.0), PricePoint::new(now, 200.0)];
        let (min, max) = value_range(&points);
        assert!((min - 95.0).abs() < 1e-9);
        assert!((max - 205.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_point_roundtrips_timestamp_as_rfc3339() {
        let point = PricePoint::new(Utc::now(), 2450.5);
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"time\":\""));
    }
}
