//! GeoJSON region schema
//!
//! Region boundaries arrive as a `FeatureCollection` of named polygons.
//! The raw serde types accept whatever the file contains; `validate`
//! turns them into `RegionFeature`s with a required name and a polygon
//! geometry, failing on the first feature that does not fit.

use crate::error::{Error, Result};
use crate::geo::{Bounds, Coordinates};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Sample Singapore planning areas bundled with the binary
const DEFAULT_REGIONS: &str = include_str!("../../data/regions.geojson");

/// Raw feature collection as found on disk
#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

/// Raw feature, before validation
#[derive(Debug, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub properties: Option<RawProperties>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
pub struct RawProperties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Value,
}

/// A closed ring of vertices
pub type Ring = Vec<Coordinates>;

/// Validated region geometry
///
/// Serialized as `{"type": ..., "coordinates": ...}` with `{lat, lng}`
/// vertices, ready for a map client to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// Outer ring followed by holes
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Iterate over every vertex of every ring
    pub fn vertices(&self) -> Box<dyn Iterator<Item = Coordinates> + '_> {
        match self {
            Geometry::Polygon(rings) => Box::new(rings.iter().flatten().copied()),
            Geometry::MultiPolygon(polygons) => {
                Box::new(polygons.iter().flatten().flatten().copied())
            }
        }
    }

    /// Bounding box of all vertices
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_coordinates(self.vertices())
    }
}

/// A named region with validated geometry
#[derive(Debug, Clone, PartialEq)]
pub struct RegionFeature {
    pub name: String,
    pub geometry: Geometry,
    pub bounds: Bounds,
}

impl FeatureCollection {
    /// Validate every feature, in order
    pub fn validate(self) -> Result<Vec<RegionFeature>> {
        self.features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| feature.validate(index))
            .collect()
    }
}

impl RawFeature {
    fn validate(self, index: usize) -> Result<RegionFeature> {
        let name = self
            .properties
            .and_then(|p| p.name)
            .filter(|n| !n.trim().is_empty())
            .ok_or(Error::MissingRegionName { index })?;

        let raw = self.geometry.ok_or_else(|| invalid(index, "missing geometry"))?;
        let geometry = match raw.kind.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(raw.coordinates)
                    .map_err(|e| invalid(index, &format!("bad Polygon coordinates: {}", e)))?;
                Geometry::Polygon(convert_polygon(index, rings)?)
            }
            "MultiPolygon" => {
                let polygons: Vec<Vec<Vec<Vec<f64>>>> = serde_json::from_value(raw.coordinates)
                    .map_err(|e| {
                        invalid(index, &format!("bad MultiPolygon coordinates: {}", e))
                    })?;
                Geometry::MultiPolygon(
                    polygons
                        .into_iter()
                        .map(|rings| convert_polygon(index, rings))
                        .collect::<Result<_>>()?,
                )
            }
            other => {
                return Err(invalid(
                    index,
                    &format!("unsupported geometry type {:?}", other),
                ))
            }
        };

        let bounds = geometry
            .bounds()
            .ok_or_else(|| invalid(index, "geometry has no vertices"))?;

        Ok(RegionFeature {
            name,
            geometry,
            bounds,
        })
    }
}

fn invalid(index: usize, reason: &str) -> Error {
    Error::InvalidGeometry {
        index,
        reason: reason.to_string(),
    }
}

/// Convert GeoJSON `[lng, lat, ...]` positions into validated coordinates
fn convert_polygon(index: usize, rings: Vec<Vec<Vec<f64>>>) -> Result<Vec<Ring>> {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(|position| -> Result<Coordinates> {
                    let (lng, lat) = match position.as_slice() {
                        [lng, lat, ..] => (*lng, *lat),
                        _ => return Err(invalid(index, "position needs at least 2 values")),
                    };
                    let c = Coordinates::new(lat, lng);
                    c.validate().map_err(|e| invalid(index, &e.to_string()))?;
                    Ok(c)
                })
                .collect::<Result<Ring>>()
        })
        .collect()
}

/// Parse and validate a GeoJSON feature collection
pub fn parse_regions(json: &str) -> Result<Vec<RegionFeature>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    collection.validate()
}

/// Load and validate regions from a GeoJSON file
pub fn load_regions(path: &Path) -> Result<Vec<RegionFeature>> {
    let content = fs::read_to_string(path)?;
    parse_regions(&content)
}

/// The bundled sample regions
pub fn default_regions() -> Result<Vec<RegionFeature>> {
    parse_regions(DEFAULT_REGIONS)
}
