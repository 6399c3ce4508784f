//! Server shared state
//!
//! The catalog and its nationwide series are computed once at startup and
//! never change; only the selection state is mutated by requests.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::selection::{SelectionState, SelectionView};
use crate::series::DataPoint;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    catalog: Catalog,

    /// Aggregate of `catalog`, computed once
    nationwide: Vec<DataPoint>,

    selection: RwLock<SelectionState>,
}

impl AppState {
    /// Create application state around a built catalog
    ///
    /// Fails if the catalog's series cannot be aggregated.
    pub fn new(config: Config, catalog: Catalog) -> Result<Self> {
        let nationwide = catalog.nationwide()?;

        let mut selection = SelectionState::new();
        selection.catalog_ready(&catalog);

        info!(
            regions = catalog.len(),
            picked = ?selection.picked(),
            "catalog ready"
        );

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            catalog,
            nationwide,
            selection: RwLock::new(selection),
        })
    }

    /// Build the catalog from config, then the state
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = Catalog::from_config(&config)?;
        Self::new(config, catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn nationwide(&self) -> &[DataPoint] {
        &self.nationwide
    }

    /// Current selection snapshot
    pub async fn selection_view(&self) -> SelectionView {
        self.selection.read().await.view(&self.catalog)
    }

    /// Apply a transition and return the resulting snapshot along with its output
    pub async fn update_selection<R>(
        &self,
        f: impl FnOnce(&mut SelectionState) -> R,
    ) -> (R, SelectionView) {
        let mut selection = self.selection.write().await;
        let out = f(&mut selection);
        (out, selection.view(&self.catalog))
    }
}
