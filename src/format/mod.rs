//! Output formatters
//!
//! Provides trait-based output formatting for dashboard reports.

pub mod json;
pub mod text;
pub mod url;

use crate::catalog::{Catalog, Location};
use crate::config::Config;
use crate::error::Result;
use crate::geo::Coordinates;
use crate::series::{to_range_series, DataPoint, RangePoint};
use serde::{Deserialize, Serialize};

/// One chart panel's worth of data: a titled series with range fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    /// Map center for this report
    pub center: Coordinates,
    pub zoom: u8,
    pub series: Vec<RangePoint>,
}

impl Report {
    pub fn new(title: impl Into<String>, center: Coordinates, zoom: u8, points: &[DataPoint]) -> Self {
        Self {
            title: title.into(),
            center,
            zoom,
            series: to_range_series(points),
        }
    }

    /// Nationwide report for an already aggregated series, at the configured map center
    pub fn from_nationwide(points: &[DataPoint], config: &Config) -> Self {
        Self::new(
            config.map.title.clone(),
            Coordinates::new(config.map.center_lat, config.map.center_lng),
            config.map.zoom,
            points,
        )
    }

    /// Aggregate the catalog and build the nationwide report
    pub fn nationwide(catalog: &Catalog, config: &Config) -> Result<Self> {
        Ok(Self::from_nationwide(&catalog.nationwide()?, config))
    }

    /// Single region report, centered on the region at detail zoom
    pub fn region(location: &Location, config: &Config) -> Self {
        Self::new(
            location.name.clone(),
            location.coords,
            config.map.detail_zoom,
            &location.data,
        )
    }
}

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a report
    ///
    /// # Arguments
    /// * `report` - The report to format
    /// * `config` - Application config (for url providers, etc.)
    fn format(&self, report: &Report, config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    let formatters: [&dyn OutputFormatter; 3] =
        [&json::JsonFormatter, &text::TextFormatter, &url::UrlFormatter];

    formatters
        .iter()
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}
