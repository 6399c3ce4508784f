//! Stacked-bar range transform
//!
//! Temperature charts draw an invisible bar of height `base` (= tMin)
//! and stack a visible bar of height `range` (= tMax - tMin) on top.

use crate::series::{round1, DataPoint};
use serde::{Deserialize, Serialize};

/// A data point with stacked-bar fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangePoint {
    #[serde(flatten)]
    pub point: DataPoint,
    /// Invisible bar height, equal to tMin
    pub base: f64,
    /// Visible bar height, tMax - tMin rounded to one decimal
    pub range: f64,
}

impl From<&DataPoint> for RangePoint {
    fn from(point: &DataPoint) -> Self {
        Self {
            point: point.clone(),
            base: point.t_min,
            range: round1(point.t_max - point.t_min),
        }
    }
}

/// Derive range fields for every point of a series
pub fn to_range_series(points: &[DataPoint]) -> Vec<RangePoint> {
    points.iter().map(RangePoint::from).collect()
}
