//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::constants::lookup::MAX_LIMIT;
use crate::coord::{is_valid_coordinate_value, Coordinates};
use crate::error::Error;
use crate::geo::{popular_cities, Geocoder, LocationCandidate, LocationDetail, PopularCity};
use crate::locale::Language;
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router<G: Geocoder>(state: Arc<AppState<G>>) -> Router {
    Router::new()
        .route("/api/search", get(search_handler::<G>))
        .route("/api/reverse", get(reverse_handler::<G>))
        .route("/api/cities", get(cities_handler))
        .route("/api/validate", post(validate_handler))
        .route("/api/status", get(status_handler::<G>))
        .layer(build_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Browser frontends call the API from another origin
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
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
            "SEARCH_FAILED" | "DETAIL_FAILED" => StatusCode::BAD_GATEWAY,
            "INTERNAL_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::Lookup(lookup) => lookup.kind.code(),
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

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text place query
    #[serde(default)]
    pub q: String,
    /// Maximum number of results (config default when omitted, clamped to 1..=40)
    pub limit: Option<usize>,
}

/// Search for locations
///
/// GET /api/search?q=bandung&limit=5
async fn search_handler<G: Geocoder>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<LocationCandidate>>, ApiError> {
    let limit = params
        .limit
        .unwrap_or_else(|| state.default_limit())
        .clamp(1, MAX_LIMIT);
    let candidates = state.geocoder.search_locations(&params.q, limit).await?;
    Ok(Json(candidates))
}

/// Reverse lookup query parameters
///
/// Kept as text so malformed numbers produce a JSON error body.
#[derive(Debug, Deserialize)]
pub struct ReverseParams {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
}

/// Describe the place at a coordinate
///
/// GET /api/reverse?lat=-6.2&lon=106.8
async fn reverse_handler<G: Geocoder>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<ReverseParams>,
) -> Result<Json<Option<LocationDetail>>, ApiError> {
    let coords = Coordinates::parse(&params.lat, &params.lon)?;
    let detail = state.geocoder.location_details(coords.lat, coords.lon).await?;
    Ok(Json(detail))
}

/// List popular cities
///
/// GET /api/cities
async fn cities_handler() -> Json<&'static [PopularCity]> {
    Json(popular_cities())
}

/// Validate request body; values may be any JSON
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lon: Value,
}

/// Validate response
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

/// Check a coordinate pair
///
/// POST /api/validate
async fn validate_handler(Json(req): Json<ValidateRequest>) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        valid: is_valid_coordinate_value(&req.lat, &req.lon),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Upstream geocoding service
    pub upstream: String,
    /// Primary language
    pub language: Language,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler<G: Geocoder>(State(state): State<Arc<AppState<G>>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.config.geocoder.base_url.clone(),
        language: state.config.geocoder.language,
    })
}
