//! Region name search
//!
//! Case-insensitive substring match over display names, in catalog order.
//! A single match is offered as an automatic pick.

use crate::catalog::{Catalog, RegionSummary};
use serde::{Deserialize, Serialize};

/// Result of a search box query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub matches: Vec<RegionSummary>,
    /// Id to pick without further input, set when exactly one region matches
    pub auto_pick: Option<String>,
}

impl Catalog {
    /// Filter regions whose name contains `query`, ignoring case
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> SearchResult {
        let needle = query.trim().to_lowercase();

        let matches: Vec<RegionSummary> = if needle.is_empty() {
            Vec::new()
        } else {
            self.iter()
                .filter(|loc| loc.name.to_lowercase().contains(&needle))
                .map(RegionSummary::from)
                .collect()
        };

        let auto_pick = match matches.as_slice() {
            [only] => Some(only.id.clone()),
            _ => None,
        };

        SearchResult {
            query: query.to_string(),
            matches,
            auto_pick,
        }
    }
}
