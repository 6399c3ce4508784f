//! Nationwide aggregation
//!
//! Averages every region's series day by day into one series for the
//! overview dashboard.

use crate::catalog::Location;
use crate::error::{Error, Result};
use crate::series::{round1, DataPoint};
use tracing::debug;

/// Average all locations' series into a single series
///
/// Each output day takes its date from the first location; the other
/// series are assumed to be aligned on the same days. Integer fields are
/// rounded to the nearest integer, temperatures to one decimal.
///
/// # Errors
/// `Error::LengthMismatch` if any location's series length differs from the
/// first location's. An empty slice yields an empty series.
pub fn aggregate(locations: &[Location]) -> Result<Vec<DataPoint>> {
    let Some(first) = locations.first() else {
        return Ok(Vec::new());
    };
    let len = first.data.len();

    if let Some(bad) = locations.iter().find(|loc| loc.data.len() != len) {
        return Err(Error::LengthMismatch {
            region: bad.id.clone(),
            expected: len,
            found: bad.data.len(),
        });
    }

    let n = locations.len() as f64;
    let series: Vec<DataPoint> = (0..len)
        .map(|i| {
            let (mut humidity, mut radiation, mut t_min, mut t_max) = (0.0, 0.0, 0.0, 0.0);
            for loc in locations {
                let p = &loc.data[i];
                humidity += f64::from(p.humidity);
                radiation += f64::from(p.radiation);
                t_min += p.t_min;
                t_max += p.t_max;
            }

            DataPoint {
                date: first.data[i].date,
                humidity: (humidity / n).round() as i32,
                radiation: (radiation / n).round() as i32,
                t_min: round1(t_min / n),
                t_max: round1(t_max / n),
            }
        })
        .collect();

    debug!(regions = locations.len(), days = len, "aggregated nationwide series");
    Ok(series)
}
