//! Geographic primitives
//!
//! Coordinates, bounding boxes and the GeoJSON region schema that feeds
//! the catalog.

pub mod geojson;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub use geojson::{default_regions, load_regions, parse_regions, Geometry, RegionFeature};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Axis-aligned bounding box in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Degenerate box around a single point
    pub fn from_point(c: Coordinates) -> Self {
        Self {
            south: c.lat,
            west: c.lng,
            north: c.lat,
            east: c.lng,
        }
    }

    /// Smallest box containing every coordinate, or None for an empty input
    pub fn from_coordinates<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let mut iter = coords.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for c in iter {
            bounds.extend(c);
        }
        Some(bounds)
    }

    /// Grow the box to include a coordinate
    pub fn extend(&mut self, c: Coordinates) {
        self.south = self.south.min(c.lat);
        self.north = self.north.max(c.lat);
        self.west = self.west.min(c.lng);
        self.east = self.east.max(c.lng);
    }

    /// Midpoint of the box
    pub fn center(&self) -> Coordinates {
        Coordinates::new((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }
}
