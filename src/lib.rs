//! region-dash: Region Weather Dashboard
//!
//! A library and web app that places named regions on a map, gives each a
//! synthetic daily weather series, and serves the nationwide aggregate and
//! per-region detail to a chart frontend.
//!
//! ## Features
//!
//! - GeoJSON region loading with explicit schema validation
//! - Seeded random-walk series (humidity, radiation, min/max temperature)
//! - Nationwide day-by-day aggregation
//! - Stacked-bar range transform for temperature charts
//! - Selection state for the map/detail/dashboard views
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use region_dash::catalog::Catalog;
//! use region_dash::geo::default_regions;
//! use region_dash::random::pseudo::SeededRandom;
//! use region_dash::series::to_range_series;
//! use chrono::NaiveDate;
//!
//! let features = default_regions().unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
//! let catalog = Catalog::build(&features, 12, today, &SeededRandom::new(1)).unwrap();
//!
//! let nationwide = catalog.nationwide().unwrap();
//! let chart = to_range_series(&nationwide);
//! assert_eq!(chart.len(), 12);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod random;
pub mod selection;
pub mod series;
pub mod server;

// Re-export commonly used types
pub use catalog::{Catalog, Location};
pub use config::Config;
pub use error::{Error, Result};
pub use selection::SelectionState;
pub use series::{DataPoint, RangePoint};
