//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::catalog::{Location, RegionSummary, SearchResult};
use crate::error::Error;
use crate::format::Report;
use crate::geo::Coordinates;
use crate::random::{available_sources, source_for, SourceInfo};
use crate::selection::{PickSource, SelectionView};
use crate::series::{to_range_series, RangePoint};
use crate::server::state::AppState;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/map", get(map_handler))
        .route("/api/regions", get(regions_handler))
        .route("/api/regions/:id", get(region_handler))
        .route("/api/nationwide", get(nationwide_handler))
        .route("/api/search", get(search_handler))
        .route("/api/selection", get(selection_handler))
        .route("/api/selection/pick", post(pick_handler))
        .route("/api/selection/open", post(open_handler))
        .route("/api/selection/close", post(close_handler))
        .route("/api/selection/dashboard", post(toggle_dashboard_handler))
        .fallback_service(ServeDir::new(static_path()).append_index_html_on_directories(true))
        .with_state(state)
}

/// Locate the static frontend
///
/// Tries relative to cwd first, then next to the executable
fn static_path() -> String {
    if std::path::Path::new("static").exists() {
        return "static".to_string();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("static")))
        .filter(|path| path.exists())
        .map(|path| path.to_string_lossy().to_string())
        .unwrap_or_else(|| "static".to_string())
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "UNKNOWN_REGION" => StatusCode::NOT_FOUND,
            "NO_SELECTION" => StatusCode::CONFLICT,
            "LENGTH_MISMATCH" | "INTERNAL_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::UnknownRegion(_) => "UNKNOWN_REGION",
            Error::LengthMismatch { .. } => "LENGTH_MISMATCH",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub version: String,
    pub regions: usize,
    pub days: usize,
    /// Random source the catalog was generated with
    pub source: String,
    pub sources: Vec<SourceInfo>,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let seed = state.config.read().await.generation.seed;
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        regions: state.catalog().len(),
        days: state.nationwide().len(),
        source: source_for(seed).name().to_string(),
        sources: available_sources(),
    })
}

/// Map defaults response
#[derive(Debug, Serialize, Deserialize)]
pub struct MapResponse {
    pub title: String,
    pub center: Coordinates,
    pub zoom: u8,
    pub detail_zoom: u8,
}

/// Map view defaults
///
/// GET /api/map
async fn map_handler(State(state): State<Arc<AppState>>) -> Json<MapResponse> {
    let config = state.config.read().await;
    Json(MapResponse {
        title: config.map.title.clone(),
        center: Coordinates::new(config.map.center_lat, config.map.center_lng),
        zoom: config.map.zoom,
        detail_zoom: config.map.detail_zoom,
    })
}

/// Regions list response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<RegionSummary>,
    pub count: usize,
}

/// List regions in catalog order
///
/// GET /api/regions
async fn regions_handler(State(state): State<Arc<AppState>>) -> Json<RegionsResponse> {
    let regions = state.catalog().summaries();
    let count = regions.len();
    Json(RegionsResponse { regions, count })
}

/// Single region response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionResponse {
    pub location: Location,
    pub series: Vec<RangePoint>,
}

/// Get one region by id or name
///
/// GET /api/regions/:id
async fn region_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RegionResponse>, ApiError> {
    let location = state
        .catalog()
        .resolve(&id)
        .ok_or(Error::UnknownRegion(id))?;

    Ok(Json(RegionResponse {
        location: location.clone(),
        series: to_range_series(&location.data),
    }))
}

/// Nationwide series with range fields
///
/// GET /api/nationwide
async fn nationwide_handler(State(state): State<Arc<AppState>>) -> Json<Report> {
    let config = state.config.read().await;
    Json(Report::from_nationwide(state.nationwide(), &config))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Search regions by name
///
/// GET /api/search?q=
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResult> {
    Json(state.catalog().search(&params.q))
}

/// Current selection
///
/// GET /api/selection
async fn selection_handler(State(state): State<Arc<AppState>>) -> Json<SelectionView> {
    Json(state.selection_view().await)
}

/// Pick request body
#[derive(Debug, Deserialize)]
pub struct PickRequest {
    /// Region id or name
    pub id: String,
    #[serde(default)]
    pub source: PickSource,
}

/// Pick a region
///
/// POST /api/selection/pick
async fn pick_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PickRequest>,
) -> Result<Json<SelectionView>, ApiError> {
    let id = state
        .catalog()
        .resolve(&req.id)
        .map(|loc| loc.id.clone())
        .ok_or(Error::UnknownRegion(req.id))?;

    let ((), view) = state
        .update_selection(|selection| selection.pick(id, req.source))
        .await;
    Ok(Json(view))
}

/// Open the detail view for the picked region
///
/// POST /api/selection/open
async fn open_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SelectionView>, ApiError> {
    let (opened, view) = state.update_selection(|s| s.open_detail()).await;
    if !opened {
        return Err(ApiError {
            error: "No region picked".to_string(),
            code: "NO_SELECTION".to_string(),
        });
    }
    Ok(Json(view))
}

/// Close the detail view
///
/// POST /api/selection/close
async fn close_handler(State(state): State<Arc<AppState>>) -> Json<SelectionView> {
    let ((), view) = state.update_selection(|s| s.close_detail()).await;
    Json(view)
}

/// Toggle the nationwide dashboard panel
///
/// POST /api/selection/dashboard
async fn toggle_dashboard_handler(State(state): State<Arc<AppState>>) -> Json<SelectionView> {
    let ((), view) = state.update_selection(|s| s.toggle_dashboard_panel()).await;
    Json(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::default(), sample_catalog()).unwrap())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        app: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, T) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());
        let (status, body): (_, StatusResponse) = get_json(app, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.running);
        assert_eq!(body.regions, 10);
        assert_eq!(body.days, 12);
        assert_eq!(body.source, "thread");
        let names: Vec<_> = body.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["thread", "seeded"]);
    }

    #[tokio::test]
    async fn test_status_reports_seeded_source() {
        let mut config = Config::default();
        config.generation.seed = Some(42);
        let state = Arc::new(AppState::new(config, sample_catalog()).unwrap());
        let (_, body): (_, StatusResponse) = get_json(create_router(state), "/api/status").await;

        assert_eq!(body.source, "seeded");
    }

    #[tokio::test]
    async fn test_map_endpoint() {
        let app = create_router(create_test_state());
        let (status, body): (_, MapResponse) = get_json(app, "/api/map").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.title, "Singapore");
        assert_eq!(body.zoom, 12);
        assert_eq!(body.detail_zoom, 16);
    }

    #[tokio::test]
    async fn test_regions_endpoint() {
        let app = create_router(create_test_state());
        let (status, body): (_, RegionsResponse) = get_json(app, "/api/regions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.count, body.regions.len());
        assert_eq!(body.regions[0].id, "choa-chu-kang");
    }

    #[tokio::test]
    async fn test_regions_carry_outlines() {
        let app = create_router(create_test_state());
        let (_, body): (_, serde_json::Value) = get_json(app, "/api/regions").await;

        let outline = &body["regions"][0]["outline"];
        assert_eq!(outline["type"], "Polygon");
        let ring = outline["coordinates"][0].as_array().unwrap();
        assert!(ring.len() >= 4);
        assert!(ring[0]["lat"].is_f64());
        assert!(ring[0]["lng"].is_f64());
    }

    #[tokio::test]
    async fn test_region_endpoint_by_id_and_name() {
        let state = create_test_state();

        let (status, body): (_, RegionResponse) =
            get_json(create_router(state.clone()), "/api/regions/bukit-timah").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.location.name, "Bukit Timah");
        assert_eq!(body.series.len(), body.location.data.len());

        let (status, body): (_, RegionResponse) =
            get_json(create_router(state), "/api/regions/Bukit%20Timah").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.location.id, "bukit-timah");
    }

    #[tokio::test]
    async fn test_region_endpoint_unknown() {
        let app = create_router(create_test_state());
        let (status, err): (_, ApiError) = get_json(app, "/api/regions/atlantis").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "UNKNOWN_REGION");
    }

    #[tokio::test]
    async fn test_nationwide_endpoint() {
        let state = create_test_state();
        let expected = state.catalog().nationwide().unwrap();

        let (status, report): (_, Report) =
            get_json(create_router(state), "/api/nationwide").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(report.title, "Singapore");
        let points: Vec<_> = report.series.iter().map(|r| r.point.clone()).collect();
        assert_eq!(points, expected);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let app = create_router(create_test_state());
        let (status, result): (_, SearchResult) = get_json(app, "/api/search?q=payoh").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.auto_pick.as_deref(), Some("toa-payoh"));
    }

    #[tokio::test]
    async fn test_search_endpoint_without_query() {
        let app = create_router(create_test_state());
        let (status, result): (_, SearchResult) = get_json(app, "/api/search").await;

        assert_eq!(status, StatusCode::OK);
        assert!(result.matches.is_empty());
    }

    #[tokio::test]
    async fn test_initial_selection() {
        let app = create_router(create_test_state());
        let (status, view): (_, SelectionView) = get_json(app, "/api/selection").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view.picked.as_deref(), Some("choa-chu-kang"));
        assert!(!view.detail_open);
        assert!(view.dashboard_visible);
    }

    #[tokio::test]
    async fn test_pick_from_map_opens_detail() {
        let state = create_test_state();

        let (status, view): (_, SelectionView) = post_json(
            create_router(state.clone()),
            "/api/selection/pick",
            serde_json::json!({ "id": "bedok", "source": "map" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view.picked.as_deref(), Some("bedok"));
        assert!(view.detail_open);
        assert!(!view.dashboard_visible);
        assert_eq!(view.selected.unwrap().name, "Bedok");

        let (_, view): (_, SelectionView) = post_json(
            create_router(state.clone()),
            "/api/selection/close",
            serde_json::json!({}),
        )
        .await;
        assert!(!view.detail_open);
        assert!(view.dashboard_visible);
        assert_eq!(view.picked.as_deref(), Some("bedok"));

        let (status, view): (_, SelectionView) = post_json(
            create_router(state),
            "/api/selection/open",
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(view.detail_open);
        assert_eq!(view.picked.as_deref(), Some("bedok"));
    }

    #[tokio::test]
    async fn test_pick_from_search_by_name() {
        let app = create_router(create_test_state());
        let (status, view): (_, SelectionView) = post_json(
            app,
            "/api/selection/pick",
            serde_json::json!({ "id": "Ang Mo Kio", "source": "search" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view.picked.as_deref(), Some("ang-mo-kio"));
        assert!(!view.detail_open);
    }

    #[tokio::test]
    async fn test_pick_unknown_region() {
        let app = create_router(create_test_state());
        let (status, err): (_, ApiError) = post_json(
            app,
            "/api/selection/pick",
            serde_json::json!({ "id": "atlantis" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "UNKNOWN_REGION");
    }

    #[tokio::test]
    async fn test_toggle_dashboard() {
        let state = create_test_state();

        let (_, view): (_, SelectionView) = post_json(
            create_router(state.clone()),
            "/api/selection/dashboard",
            serde_json::json!({}),
        )
        .await;
        assert!(!view.dashboard_visible);

        let (_, view): (_, SelectionView) = post_json(
            create_router(state),
            "/api/selection/dashboard",
            serde_json::json!({}),
        )
        .await;
        assert!(view.dashboard_visible);
    }

    #[tokio::test]
    async fn test_open_with_empty_catalog() {
        let state = Arc::new(AppState::new(Config::default(), Catalog::default()).unwrap());
        let (status, err): (_, ApiError) = post_json(
            create_router(state),
            "/api/selection/open",
            serde_json::json!({}),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(err.code, "NO_SELECTION");
    }
}
