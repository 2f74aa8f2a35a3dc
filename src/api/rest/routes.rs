//! # Router Assembly
//!
//! Wires the REST handlers into an axum router with tracing and CORS
//! layers. CORS is permissive because the consumer is a mobile client
//! calling from arbitrary origins.

use crate::api::rest::handlers::{health, search_stations, submit_price, AppState};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the service router.
///
/// Routes:
/// - `GET /health` - liveness probe
/// - `GET /api/v1/stations` - station search with aggregated prices
/// - `POST /api/v1/prices` - community price submission
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/stations", get(search_stations))
        .route("/api/v1/prices", post(submit_price))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
