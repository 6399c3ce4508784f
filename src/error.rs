//! Error types for region-dash

use thiserror::Error;

/// Main error type for region-dash operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Series length mismatch: region '{region}' has {found} points, expected {expected}")]
    LengthMismatch {
        region: String,
        expected: usize,
        found: usize,
    },

    #[error("A {days}-day series ending {today} reaches past the earliest supported date")]
    SeriesTooLong { days: usize, today: chrono::NaiveDate },

    #[error("Region feature #{index} has no name property")]
    MissingRegionName { index: usize },

    #[error("Region name {0:?} does not produce a usable id")]
    InvalidRegionName(String),

    #[error("Region feature #{index} has invalid geometry: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for region-dash operations
pub type Result<T> = std::result::Result<T, Error>;
