//! # REST API
//!
//! The service boundary: two operations mapping 1:1 onto the station
//! aggregator and the submission guard, plus a health probe. The boundary
//! itself is stateless; all state lives behind [`AppState`].

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, Caller, ErrorResponse, HealthResponse, SearchParams, SearchResponse,
    StationResponse, SubmitPriceRequest, SubmitPriceResponse,
};
pub use routes::create_router;
