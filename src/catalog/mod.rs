//! Region catalog
//!
//! Builds one `Location` per region feature: a slug id, the bounding-box
//! center as its marker position, and a generated daily series seeded by
//! the feature's position in the input. The catalog is built once and
//! treated as immutable afterwards.

pub mod search;
pub mod slug;

use crate::config::Config;
use crate::error::Result;
use crate::geo::{default_regions, load_regions, Bounds, Coordinates, Geometry, RegionFeature};
use crate::random::{source_for, RandomSource};
use crate::series::{aggregate, generate_series, DataPoint};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

pub use search::SearchResult;
pub use slug::region_id;

/// A named region with its marker position and series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    /// Center of the region's bounding box
    pub coords: Coordinates,
    pub bounds: Bounds,
    /// Region boundary for drawing on the map
    pub outline: Geometry,
    /// Oldest day first, last point is the generation date
    pub data: Vec<DataPoint>,
}

/// A location without its series, for lists and search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub id: String,
    pub name: String,
    pub coords: Coordinates,
    pub bounds: Bounds,
    pub outline: Geometry,
}

impl From<&Location> for RegionSummary {
    fn from(loc: &Location) -> Self {
        Self {
            id: loc.id.clone(),
            name: loc.name.clone(),
            coords: loc.coords,
            bounds: loc.bounds,
            outline: loc.outline.clone(),
        }
    }
}

/// Ordered, immutable set of locations
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locations: Vec<Location>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build locations from validated region features
    ///
    /// # Arguments
    /// * `features` - Regions in input order; feature `i` gets series seed `i + 1`
    /// * `days` - Series length
    /// * `today` - Date of each series' last point
    /// * `rng` - Random source for the series walk
    pub fn build(
        features: &[RegionFeature],
        days: usize,
        today: NaiveDate,
        rng: &dyn RandomSource,
    ) -> Result<Self> {
        let locations = features
            .iter()
            .enumerate()
            .map(|(index, feature)| -> Result<Location> {
                Ok(Location {
                    id: region_id(&feature.name)?,
                    name: feature.name.clone(),
                    coords: feature.bounds.center(),
                    bounds: feature.bounds,
                    outline: feature.geometry.clone(),
                    data: generate_series(index as i64 + 1, days, today, rng)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self::from_locations(locations);
        info!(
            regions = catalog.len(),
            days,
            source = rng.name(),
            "built region catalog"
        );
        Ok(catalog)
    }

    /// Build the catalog described by a config
    ///
    /// Uses the configured GeoJSON file if any, the bundled regions otherwise,
    /// with series ending at the current UTC date.
    pub fn from_config(config: &Config) -> Result<Self> {
        let features = match &config.data.regions {
            Some(path) => load_regions(path)?,
            None => default_regions()?,
        };
        let rng = source_for(config.generation.seed);
        Self::build(
            &features,
            config.generation.days,
            Utc::now().date_naive(),
            rng.as_ref(),
        )
    }

    /// Wrap already-built locations, keeping their order
    ///
    /// When two locations share an id, lookups by id resolve to the later one.
    pub fn from_locations(locations: Vec<Location>) -> Self {
        let mut by_id = HashMap::with_capacity(locations.len());
        for (idx, loc) in locations.iter().enumerate() {
            if let Some(prev) = by_id.insert(loc.id.clone(), idx) {
                warn!(
                    id = %loc.id,
                    shadowed = prev,
                    index = idx,
                    "duplicate region id, later entry wins lookups"
                );
            }
        }
        Self { locations, by_id }
    }

    /// Look up a location by id
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.by_id.get(id).map(|&idx| &self.locations[idx])
    }

    /// Look up a location by display name, ignoring case and surrounding spaces
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        let wanted = name.trim().to_lowercase();
        self.locations
            .iter()
            .find(|loc| loc.name.trim().to_lowercase() == wanted)
    }

    /// Look up by id first, then by name
    pub fn resolve(&self, id_or_name: &str) -> Option<&Location> {
        self.get(id_or_name).or_else(|| self.find_by_name(id_or_name))
    }

    /// First location in catalog order
    pub fn first(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Summaries of every location, in order
    pub fn summaries(&self) -> Vec<RegionSummary> {
        self.iter().map(RegionSummary::from).collect()
    }

    /// Day-by-day average of every location's series
    pub fn nationwide(&self) -> Result<Vec<DataPoint>> {
        aggregate(&self.locations)
    }
}
