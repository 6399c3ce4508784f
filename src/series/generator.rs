//! Synthetic series generation
//!
//! Humidity and radiation follow a clamped random walk from a
//! seed-dependent start. Temperatures are resampled every day around a
//! seed-fixed baseline; the baseline itself never walks.

use crate::constants::generation::*;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::series::{round1, DataPoint};
use chrono::{Days, NaiveDate, Utc};

/// Generate a daily series ending at `today`
///
/// # Arguments
/// * `seed` - Varies the starting humidity, radiation and temperature baseline
/// * `days` - Number of points to produce
/// * `today` - Date of the last point
/// * `rng` - Random source for the walk
///
/// # Returns
/// `days` points in ascending date order, oldest first
///
/// # Errors
/// `Error::SeriesTooLong` if the oldest day would fall before the earliest
/// representable date.
///
/// # Algorithm
/// - humidity0 = 70 + (seed mod 5) * 2, then += U[-5, 5], clamped to [55, 95]
/// - radiation0 = 400 + (seed mod 7) * 50, then += U[-60, 60], clamped to [120, 950]
/// - tMin = U[base - 1, base + 1] with base = 24 + (seed mod 3), clamped to [22, 27]
/// - tMax = tMin + 3 + U[0, 4), clamped to [27, 35]
///
/// Since tMin never exceeds 27 and tMax never drops below 27, every point
/// satisfies tMax >= tMin.
pub fn generate_series(
    seed: i64,
    days: usize,
    today: NaiveDate,
    rng: &dyn RandomSource,
) -> Result<Vec<DataPoint>> {
    if days > 0 && today.checked_sub_days(Days::new(days as u64 - 1)).is_none() {
        return Err(Error::SeriesTooLong { days, today });
    }

    // rem_euclid keeps negative seeds inside the documented start ranges
    let mut humidity = 70.0 + (seed.rem_euclid(5) * 2) as f64;
    let mut radiation = 400.0 + (seed.rem_euclid(7) * 50) as f64;
    let base = 24.0 + seed.rem_euclid(3) as f64;

    let series: Vec<DataPoint> = (0..days)
        .rev()
        .map(|days_ago| {
            humidity = (humidity + rng.uniform(-HUMIDITY_STEP, HUMIDITY_STEP))
                .clamp(HUMIDITY_MIN, HUMIDITY_MAX);
            radiation = (radiation + rng.uniform(-RADIATION_STEP, RADIATION_STEP))
                .clamp(RADIATION_MIN, RADIATION_MAX);
            let t_min = rng.uniform(base - 1.0, base + 1.0).clamp(T_MIN_LOW, T_MIN_HIGH);
            let t_max = (t_min + T_SPREAD_OFFSET + rng.uniform(0.0, T_SPREAD_RANDOM))
                .clamp(T_MAX_LOW, T_MAX_HIGH);

            DataPoint {
                date: today - Days::new(days_ago as u64),
                humidity: humidity.round() as i32,
                radiation: radiation.round() as i32,
                t_min: round1(t_min),
                t_max: round1(t_max),
            }
        })
        .collect();
    Ok(series)
}

/// Generate a series ending at the current UTC date
pub fn generate_series_today(
    seed: i64,
    days: usize,
    rng: &dyn RandomSource,
) -> Result<Vec<DataPoint>> {
    generate_series(seed, days, Utc::now().date_naive(), rng)
}
