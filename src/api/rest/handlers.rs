//! # REST Handlers
//!
//! Request handlers for the two service operations plus a health probe.
//!
//! Handlers translate typed application outcomes into the wire contract:
//! validation failures surface verbatim with a 400, rate-limit rejections
//! return 429 with no internal detail, and infrastructure faults return a
//! generic retryable 503 while the full error is logged.

use crate::application::error::ApplicationError;
use crate::application::services::{StationAggregator, SubmissionGuard};
use crate::domain::entities::AggregatedStation;
use crate::domain::value_objects::{CallerId, Coordinate, FuelType};
use axum::extract::{ConnectInfo, FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Default search radius in meters (roughly five miles).
pub const DEFAULT_RADIUS_METERS: f64 = 8_000.0;

/// Minimum accepted search radius in meters.
pub const MIN_RADIUS_METERS: f64 = 100.0;

/// Maximum accepted search radius in meters.
pub const MAX_RADIUS_METERS: f64 = 50_000.0;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Station aggregation service.
    pub aggregator: Arc<StationAggregator>,
    /// Price submission guard.
    pub submission_guard: Arc<SubmissionGuard>,
}

/// Query parameters for the station search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Origin latitude in degrees.
    pub latitude: Option<f64>,
    /// Origin longitude in degrees.
    pub longitude: Option<f64>,
    /// Search radius in meters; defaults to [`DEFAULT_RADIUS_METERS`].
    pub radius: Option<f64>,
    /// Fuel type to show prices for; defaults to regular.
    pub fuel_type: Option<String>,
}

/// One station in a search response.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    /// Provider-assigned station identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address or vicinity.
    pub address: String,
    /// Distance from the query origin in meters.
    pub distance_meters: f64,
    /// Station latitude.
    pub latitude: f64,
    /// Station longitude.
    pub longitude: f64,
    /// Provider quality rating, when reported.
    pub rating: Option<f64>,
    /// Whether the station is currently open, when known.
    pub open_now: Option<bool>,
    /// Formatted current price, or the no-data sentinel.
    pub price: String,
    /// True when the price was submitted within the freshness window.
    pub fresh: bool,
}

impl From<AggregatedStation> for StationResponse {
    fn from(aggregated: AggregatedStation) -> Self {
        let station = aggregated.station;
        Self {
            id: station.id.to_string(),
            name: station.name,
            address: station.address,
            distance_meters: station.distance_meters,
            latitude: station.location.latitude(),
            longitude: station.location.longitude(),
            rating: station.rating,
            open_now: station.open_now,
            price: aggregated.display_price,
            fresh: aggregated.fresh,
        }
    }
}

/// Body of a successful search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matching stations, unordered.
    pub stations: Vec<StationResponse>,
}

/// Body of a price submission.
#[derive(Debug, Deserialize)]
pub struct SubmitPriceRequest {
    /// Station the price was observed at.
    pub station_id: String,
    /// Submitted price; a JSON number or numeric string.
    pub price: serde_json::Value,
    /// Fuel type; defaults to regular when absent.
    pub fuel_type: Option<String>,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitPriceResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable category: `invalid_request`, `rate_limited` or
    /// `unavailable`.
    pub code: &'static str,
}

/// Body of the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
}

/// Caller identity extracted from the transport layer.
///
/// Prefers the first `X-Forwarded-For` entry so deployments behind a proxy
/// key rate limits on the real client, falling back to the peer socket
/// address.
#[derive(Debug, Clone)]
pub struct Caller(pub CallerId);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let caller = forwarded
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|info| info.0.ip().to_string())
            })
            .unwrap_or_else(|| "unknown".to_string());

        Ok(Self(CallerId::new(caller)))
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/v1/stations
///
/// Finds fuel stations near a coordinate with their current community
/// prices. An empty result set is a 200 with an empty array.
pub async fn search_stations(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let (Some(latitude), Some(longitude)) = (params.latitude, params.longitude) else {
        return Err(bad_request("latitude and longitude are required"));
    };
    let origin = Coordinate::new(latitude, longitude)
        .ok_or_else(|| bad_request("invalid coordinates"))?;

    let radius = params.radius.unwrap_or(DEFAULT_RADIUS_METERS);
    if !(MIN_RADIUS_METERS..=MAX_RADIUS_METERS).contains(&radius) {
        return Err(bad_request(format!(
            "radius must be between {MIN_RADIUS_METERS} and {MAX_RADIUS_METERS} meters"
        )));
    }

    let fuel_type = match params.fuel_type.as_deref() {
        Some(raw) => raw
            .parse::<FuelType>()
            .map_err(|e| bad_request(e.to_string()))?,
        None => FuelType::default(),
    };

    let aggregated = state
        .aggregator
        .aggregate(origin, radius, fuel_type)
        .await
        .map_err(|e| application_error(&e))?;

    Ok(Json(SearchResponse {
        stations: aggregated.into_iter().map(StationResponse::from).collect(),
    }))
}

/// POST /api/v1/prices
///
/// Submits a community price observation for a station and fuel type.
pub async fn submit_price(
    State(state): State<AppState>,
    Caller(caller): Caller,
    Json(body): Json<SubmitPriceRequest>,
) -> Result<Json<SubmitPriceResponse>, ApiError> {
    let fuel_type = body.fuel_type.as_deref().unwrap_or("regular");
    let price = raw_price(&body.price);

    let record = state
        .submission_guard
        .submit(&caller, &body.station_id, fuel_type, &price)
        .await
        .map_err(|e| application_error(&e))?;

    Ok(Json(SubmitPriceResponse {
        success: true,
        message: format!(
            "price {} recorded for {}",
            record.price.display(),
            record.fuel_type
        ),
    }))
}

/// Renders a JSON price field as the raw string the submission guard
/// parses, accepting both numbers and numeric strings.
fn raw_price(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
            code: "invalid_request",
        }),
    )
}

/// Maps an application error to the wire contract.
///
/// Infrastructure detail (provider-internal specifics, store faults) never
/// reaches the caller; it is logged here instead.
fn application_error(error: &ApplicationError) -> ApiError {
    if error.is_validation() {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: error.to_string(),
                code: "invalid_request",
            }),
        )
    } else if error.is_rate_limited() {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "too many submissions, please wait before trying again".to_string(),
                code: "rate_limited",
            }),
        )
    } else {
        tracing::error!(%error, "infrastructure fault while serving request");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "service temporarily unavailable, please retry".to_string(),
                code: "unavailable",
            }),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::RepositoryError;
    use serde_json::json;

    #[test]
    fn raw_price_accepts_numbers_and_strings() {
        assert_eq!(raw_price(&json!(3.45)), "3.45");
        assert_eq!(raw_price(&json!("3.45")), "3.45");
        assert_eq!(raw_price(&json!(null)), "null");
    }

    #[test]
    fn validation_error_maps_to_400() {
        let (status, Json(body)) =
            application_error(&ApplicationError::invalid_price("price must be a valid number"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "invalid_request");
        assert!(body.error.contains("valid number"));
    }

    #[test]
    fn rate_limit_maps_to_429_without_detail() {
        let (status, Json(body)) = application_error(&ApplicationError::RateLimitExceeded);
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body.code, "rate_limited");
    }

    #[test]
    fn store_fault_maps_to_generic_503() {
        let error = ApplicationError::Store(RepositoryError::unavailable("pg down at 10.1.2.3"));
        let (status, Json(body)) = application_error(&error);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.code, "unavailable");
        // Internal specifics must not leak to the caller.
        assert!(!body.error.contains("10.1.2.3"));
    }
}
