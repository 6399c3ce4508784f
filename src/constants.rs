//! Centralized constants for the region-dash crate
//!
//! Generation bounds live here so the generator, its tests and the
//! formatters agree on the same domain limits.

/// Synthetic series generation limits
pub mod generation {
    /// Default number of days in a generated series
    pub const DEFAULT_DAYS: usize = 12;

    /// Relative humidity bounds (%)
    pub const HUMIDITY_MIN: f64 = 55.0;
    pub const HUMIDITY_MAX: f64 = 95.0;
    /// Maximum day-to-day humidity step (%)
    pub const HUMIDITY_STEP: f64 = 5.0;

    /// Solar radiation bounds (W/m²)
    pub const RADIATION_MIN: f64 = 120.0;
    pub const RADIATION_MAX: f64 = 950.0;
    /// Maximum day-to-day radiation step (W/m²)
    pub const RADIATION_STEP: f64 = 60.0;

    /// Daily minimum temperature bounds (°C)
    pub const T_MIN_LOW: f64 = 22.0;
    pub const T_MIN_HIGH: f64 = 27.0;

    /// Daily maximum temperature bounds (°C)
    pub const T_MAX_LOW: f64 = 27.0;
    pub const T_MAX_HIGH: f64 = 35.0;

    /// tMax is tMin plus this fixed offset plus a random spread
    pub const T_SPREAD_OFFSET: f64 = 3.0;
    pub const T_SPREAD_RANDOM: f64 = 4.0;
}

/// Map presentation defaults
pub mod map {
    /// Dashboard title for the nationwide series
    pub const DEFAULT_TITLE: &str = "Singapore";

    /// Initial map center
    pub const DEFAULT_CENTER_LAT: f64 = 1.3521;
    pub const DEFAULT_CENTER_LNG: f64 = 103.8198;

    /// Zoom level of the overview map
    pub const DEFAULT_ZOOM: u8 = 12;

    /// Zoom level of the mini-map in the detail view
    pub const DEFAULT_DETAIL_ZOOM: u8 = 16;
}
