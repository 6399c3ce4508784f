//! Daily weather series
//!
//! This module handles:
//! - The `DataPoint` record shared by raw and aggregate series
//! - Synthetic series generation (random walk per region)
//! - Nationwide aggregation across regions
//! - The stacked-bar range transform for temperature charts

pub mod aggregate;
pub mod generator;
pub mod range;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use aggregate::aggregate;
pub use generator::{generate_series, generate_series_today};
pub use range::{to_range_series, RangePoint};

/// One day's observation for a region or an aggregate
///
/// Serialized with the chart field names (`tMin`, `tMax`) and an ISO
/// `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub date: NaiveDate,
    /// Relative humidity (%)
    pub humidity: i32,
    /// Solar radiation (W/m²)
    pub radiation: i32,
    /// Daily minimum temperature (°C, one decimal)
    pub t_min: f64,
    /// Daily maximum temperature (°C, one decimal)
    pub t_max: f64,
}

/// Round to one decimal place
///
/// Rounds the exact binary value, so a mean stored as 26.94999... gives
/// 26.9 rather than 27.0. Exact ties (values ending in .25 or .75) round
/// away from zero.
pub fn round1(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        // value * 10 is exact here
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(24.34), 24.3);
        assert_eq!(round1(24.36), 24.4);
        assert_eq!(round1(29.8 - 24.3), 5.5);
        assert_eq!(round1(-0.04), 0.0);
    }

    #[test]
    fn test_round1_uses_exact_binary_value() {
        // 26.95 is stored as 26.9499999...
        assert_eq!(round1((27.0 + 26.9) / 2.0), 26.9);
        assert_eq!(round1(26.95), 26.9);
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(1.45), 1.4);
        assert_eq!(round1(2.675), 2.7);
    }

    #[test]
    fn test_round1_exact_ties_away_from_zero() {
        assert_eq!(round1(26.25), 26.3);
        assert_eq!(round1(26.75), 26.8);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(24.5), 24.5);
    }

    #[test]
    fn test_data_point_serialization() {
        let point = DataPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            humidity: 80,
            radiation: 512,
            t_min: 24.3,
            t_max: 29.8,
        };

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["tMin"], 24.3);
        assert_eq!(json["tMax"], 29.8);

        let parsed: DataPoint = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, point);
    }
}
