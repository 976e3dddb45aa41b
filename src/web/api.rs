use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use log::{error, info};
use std::time::Instant;

use crate::context::{normalize_station_id, PlannerContext};
use crate::history::format_duration;
use crate::web::models::*;
use crate::Error;

/// Maximum number of stations returned by one listing
pub const STATION_LIST_LIMIT: usize = 100;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub planner: PlannerContext<u32>,
}

impl AppState {
    pub fn new(planner: PlannerContext<u32>) -> Self {
        Self { planner }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(find_route))
        .route("/api/health", get(health_check))
}

/// List stations, optionally filtered by a search term
pub async fn list_stations(
    State(state): State<AppState>,
    Query(params): Query<StationSearchParams>,
) -> Json<StationListResponse> {
    let stations = state
        .planner
        .search_stations(&params.search, STATION_LIST_LIMIT)
        .into_iter()
        .map(|(id, name)| StationInfo { id, name })
        .collect();

    Json(StationListResponse {
        stations,
        total: state.planner.count_stations(&params.search),
    })
}

/// Find the shortest route between two stations
pub async fn find_route(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<RouteResponse>, ApiError> {
    let start = normalize_station_id(&params.start);
    let end = normalize_station_id(&params.end);
    if start.is_empty() || end.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "missing_station",
                "Both start and end stations are required",
            )),
        ));
    }

    let planner = state.planner.clone();
    let (from, to) = (start.clone(), end.clone());
    let started = Instant::now();
    let result = tokio::task::spawn_blocking(move || planner.route(&from, &to))
        .await
        .map_err(|err| {
            error!("Route query task failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("query_failed", err.to_string())),
            )
        })?;
    let execution_time = started.elapsed();

    let route = result.map_err(error_response)?;
    info!(
        "Route {} -> {}: {}s over {} stations in {:?}",
        start,
        end,
        route.total_weight,
        route.path.len(),
        execution_time
    );

    let names = &state.planner.names;
    let path = route
        .path
        .iter()
        .enumerate()
        .map(|(i, id)| RouteStop {
            id: id.clone(),
            name: names.label(id).to_string(),
            order: i + 1,
        })
        .collect();

    Ok(Json(RouteResponse {
        start,
        end,
        duration: route.total_weight,
        duration_text: format_duration(route.total_weight),
        stations: route.path.len(),
        path,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "stations": state.planner.count_stations(""),
    }))
}

/// Maps a planner error onto an HTTP status and JSON body
pub fn error_response(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::NodeNotFound(_) => (StatusCode::NOT_FOUND, "station_not_found"),
        Error::NoPathExists { .. } => (StatusCode::NOT_FOUND, "no_path"),
        Error::Corrupt(_) => {
            error!("Route reconstruction failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "corrupt_path")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    (status, Json(ErrorResponse::new(code, err.to_string())))
}
