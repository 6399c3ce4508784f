//! Selection state
//!
//! Tracks the picked region, whether its detail view is open and whether
//! the nationwide dashboard panel is toggled on. Owned by the composing
//! layer and changed only through the transition methods below.

use crate::catalog::{Catalog, Location};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Detail view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail<'a> {
    Closed,
    Open(&'a str),
}

/// Where a pick came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickSource {
    /// Map pin: picks and opens the detail view
    #[default]
    Map,
    /// Search box: picks only
    Search,
}

impl std::str::FromStr for PickSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "map" => Ok(Self::Map),
            "search" => Ok(Self::Search),
            _ => Err(format!("Unknown pick source: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    picked: Option<String>,
    open: bool,
    dashboard_panel: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Closed, nothing picked, dashboard panel toggled on
    pub fn new() -> Self {
        Self {
            picked: None,
            open: false,
            dashboard_panel: true,
        }
    }

    /// Pick the first region once the catalog is available
    ///
    /// Leaves an existing pick alone; an empty catalog leaves nothing picked.
    pub fn catalog_ready(&mut self, catalog: &Catalog) {
        if self.picked.is_none() {
            self.picked = catalog.first().map(|loc| loc.id.clone());
            debug!(picked = ?self.picked, "initial pick");
        }
    }

    /// Set the picked region without touching the detail view
    pub fn pick_location(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(%id, "pick location");
        self.picked = Some(id);
    }

    /// Pick and open, as a map pin click does
    pub fn pick_from_map(&mut self, id: impl Into<String>) {
        self.pick_location(id);
        self.open_detail();
    }

    /// Dispatch a pick by source
    pub fn pick(&mut self, id: impl Into<String>, source: PickSource) {
        match source {
            PickSource::Map => self.pick_from_map(id),
            PickSource::Search => self.pick_location(id),
        }
    }

    /// Open the detail view for the picked region
    ///
    /// Returns false and stays closed when nothing is picked.
    pub fn open_detail(&mut self) -> bool {
        if self.picked.is_none() {
            return false;
        }
        self.open = true;
        debug!(picked = ?self.picked, "detail opened");
        true
    }

    /// Close the detail view; the pick is kept
    pub fn close_detail(&mut self) {
        self.open = false;
        debug!("detail closed");
    }

    /// Flip the dashboard panel toggle
    pub fn toggle_dashboard_panel(&mut self) {
        self.dashboard_panel = !self.dashboard_panel;
        debug!(dashboard_panel = self.dashboard_panel, "dashboard toggled");
    }

    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    pub fn detail(&self) -> Detail<'_> {
        match (&self.picked, self.open) {
            (Some(id), true) => Detail::Open(id),
            _ => Detail::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.detail(), Detail::Open(_))
    }

    /// Raw toggle flag, ignoring the detail view
    pub fn dashboard_toggled(&self) -> bool {
        self.dashboard_panel
    }

    /// Whether the nationwide panel should render: toggled on and no detail open
    pub fn dashboard_panel_visible(&self) -> bool {
        self.dashboard_panel && !self.is_open()
    }

    /// The location to show, falling back to the first region when the pick
    /// is unset or unknown
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a Location> {
        self.picked
            .as_deref()
            .and_then(|id| catalog.get(id))
            .or_else(|| catalog.first())
    }

    /// Snapshot for rendering
    pub fn view(&self, catalog: &Catalog) -> SelectionView {
        SelectionView {
            picked: self.picked.clone(),
            detail_open: self.is_open(),
            dashboard_visible: self.dashboard_panel_visible(),
            selected: self.selected(catalog).cloned(),
        }
    }
}

/// Rendering snapshot of the selection state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionView {
    pub picked: Option<String>,
    pub detail_open: bool,
    pub dashboard_visible: bool,
    pub selected: Option<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert_eq!(state.picked(), None);
        assert_eq!(state.detail(), Detail::Closed);
        assert!(state.dashboard_panel_visible());
    }

    #[test]
    fn test_catalog_ready_picks_first() {
        let catalog = sample_catalog();
        let mut state = SelectionState::new();
        state.catalog_ready(&catalog);

        assert_eq!(state.picked(), Some("choa-chu-kang"));
        assert_eq!(state.detail(), Detail::Closed);
    }

    #[test]
    fn test_catalog_ready_keeps_existing_pick() {
        let catalog = sample_catalog();
        let mut state = SelectionState::new();
        state.pick_location("bedok");
        state.catalog_ready(&catalog);
        assert_eq!(state.picked(), Some("bedok"));
    }

    #[test]
    fn test_empty_catalog_cannot_open() {
        let mut state = SelectionState::new();
        state.catalog_ready(&Catalog::default());

        assert_eq!(state.picked(), None);
        assert!(!state.open_detail());
        assert_eq!(state.detail(), Detail::Closed);
        assert!(state.selected(&Catalog::default()).is_none());
    }

    #[test]
    fn test_pick_does_not_open() {
        let mut state = SelectionState::new();
        state.pick_location("queenstown");
        assert_eq!(state.picked(), Some("queenstown"));
        assert!(!state.is_open());
    }

    #[test]
    fn test_open_close_keeps_pick() {
        let mut state = SelectionState::new();
        state.pick_location("queenstown");

        assert!(state.open_detail());
        assert_eq!(state.detail(), Detail::Open("queenstown"));

        state.close_detail();
        assert_eq!(state.detail(), Detail::Closed);
        assert_eq!(state.picked(), Some("queenstown"));

        assert!(state.open_detail());
        assert_eq!(state.detail(), Detail::Open("queenstown"));
    }

    #[test]
    fn test_pick_while_open_switches_region() {
        let mut state = SelectionState::new();
        state.pick_from_map("bedok");
        state.pick_location("tampines");
        assert_eq!(state.detail(), Detail::Open("tampines"));
    }

    #[test]
    fn test_pick_sources() {
        let mut state = SelectionState::new();
        state.pick("bedok", PickSource::Search);
        assert!(!state.is_open());

        state.pick("tampines", PickSource::Map);
        assert_eq!(state.detail(), Detail::Open("tampines"));
    }

    #[test]
    fn test_dashboard_suppressed_while_open() {
        let mut state = SelectionState::new();
        state.pick_from_map("bedok");
        assert!(state.dashboard_toggled());
        assert!(!state.dashboard_panel_visible());

        state.close_detail();
        assert!(state.dashboard_panel_visible());

        state.toggle_dashboard_panel();
        assert!(!state.dashboard_panel_visible());
        state.toggle_dashboard_panel();
        assert!(state.dashboard_panel_visible());
    }

    #[test]
    fn test_toggle_is_independent_of_detail() {
        let mut state = SelectionState::new();
        state.pick_from_map("bedok");
        state.toggle_dashboard_panel();
        assert!(state.is_open());
        assert!(!state.dashboard_toggled());
    }

    #[test]
    fn test_selected_falls_back_to_first() {
        let catalog = sample_catalog();
        let mut state = SelectionState::new();
        assert_eq!(state.selected(&catalog).unwrap().id, "choa-chu-kang");

        state.pick_location("atlantis");
        assert_eq!(state.selected(&catalog).unwrap().id, "choa-chu-kang");

        state.pick_location("bedok");
        assert_eq!(state.selected(&catalog).unwrap().id, "bedok");
    }

    #[test]
    fn test_view() {
        let catalog = sample_catalog();
        let mut state = SelectionState::new();
        state.catalog_ready(&catalog);
        state.pick_from_map("toa-payoh");

        let view = state.view(&catalog);
        assert_eq!(view.picked.as_deref(), Some("toa-payoh"));
        assert!(view.detail_open);
        assert!(!view.dashboard_visible);
        assert_eq!(view.selected.unwrap().name, "Toa Payoh");
    }

    #[test]
    fn test_pick_source_from_str() {
        assert_eq!("map".parse::<PickSource>().unwrap(), PickSource::Map);
        assert_eq!("Search".parse::<PickSource>().unwrap(), PickSource::Search);
        assert!("pin".parse::<PickSource>().is_err());
    }
}
