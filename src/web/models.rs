use serde::{Deserialize, Serialize};

/// Query string of `GET /api/stations`
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchParams {
    #[serde(default)]
    pub search: String,
}

/// A station as listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationInfo>,
    /// Matches before the listing cap was applied
    pub total: usize,
}

/// Query string of `GET /api/route`
#[derive(Debug, Default, Deserialize)]
pub struct RouteParams {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// One stop along a returned route
#[derive(Debug, Clone, Serialize)]
pub struct RouteStop {
    pub id: String,
    pub name: String,
    pub order: usize,
}

/// Response containing a shortest route
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub start: String,
    pub end: String,
    /// Total travel time in seconds
    pub duration: u32,
    pub duration_text: String,
    pub stations: usize,
    pub path: Vec<RouteStop>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}
