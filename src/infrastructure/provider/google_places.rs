//! # Google Places Adapter
//!
//! [`PlaceSearchProvider`] implementation over the Google Places nearby
//! search API.
//!
//! Normalizes the provider's heterogeneous results into [`Station`] values:
//! results that are not primarily fuel stations are filtered out, distances
//! are computed from the query origin, and missing display fields fall back
//! to placeholders. A `ZERO_RESULTS` status is an empty success; any other
//! non-`OK` status is surfaced as a provider rejection.

use crate::domain::entities::Station;
use crate::domain::value_objects::{Coordinate, StationId};
use crate::infrastructure::provider::error::{ProviderError, ProviderResult};
use crate::infrastructure::provider::http_client::HttpClient;
use crate::infrastructure::provider::traits::PlaceSearchProvider;
use async_trait::async_trait;
use serde::Deserialize;

/// Default base URL of the Google Places web service.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Place type requested from the provider.
const PLACE_TYPE: &str = "gas_station";

/// Name fragments that mark a result as primarily something other than a
/// fuel station, unless the name also mentions gas or fuel.
const EXCLUDED_NAME_KEYWORDS: [&str; 7] = [
    "store",
    "mart",
    "market",
    "shop",
    "pharmacy",
    "coffee",
    "restaurant",
];

/// Google Places nearby-search adapter.
#[derive(Debug, Clone)]
pub struct GooglePlacesProvider {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl GooglePlacesProvider {
    /// Creates an adapter against the production Google endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unavailable` if the HTTP client cannot be
    /// constructed.
    pub fn new(api_key: impl Into<String>, timeout_ms: u64) -> ProviderResult<Self> {
        Ok(Self {
            http: HttpClient::new(timeout_ms)?,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Overrides the base URL, for tests and self-hosted proxies.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self) -> String {
        format!("{}/nearbysearch/json", self.base_url)
    }
}

#[async_trait]
impl PlaceSearchProvider for GooglePlacesProvider {
    async fn search(&self, origin: Coordinate, radius_meters: f64) -> ProviderResult<Vec<Station>> {
        let params = [
            (
                "location",
                format!("{},{}", origin.latitude(), origin.longitude()),
            ),
            ("radius", radius_meters.to_string()),
            ("type", PLACE_TYPE.to_string()),
            ("key", self.api_key.clone()),
        ];

        let response: NearbySearchResponse = self
            .http
            .get_with_params(&self.search_url(), &params)
            .await?;

        match response.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(Vec::new()),
            status => {
                let detail = response.error_message.unwrap_or_default();
                return Err(ProviderError::rejected(format!("{status} {detail}")));
            }
        }

        let stations = response
            .results
            .into_iter()
            .filter_map(|place| normalize_place(place, origin))
            .collect();

        Ok(stations)
    }
}

/// Converts one provider result into a station, or drops it when it is not
/// usable as a fuel station.
fn normalize_place(place: PlaceResult, origin: Coordinate) -> Option<Station> {
    let id = StationId::new(place.place_id?);
    let name = place.name.unwrap_or_else(|| "Unknown".to_string());

    if !is_primarily_fuel_station(&name, &place.types) {
        return None;
    }

    let location = Coordinate::new(place.geometry.location.lat, place.geometry.location.lng)?;
    let address = place.vicinity.unwrap_or_else(|| "N/A".to_string());

    let mut station = Station::new(
        id,
        name,
        address,
        location,
        origin.distance_meters(location),
    );
    if let Some(rating) = place.rating {
        station = station.with_rating(rating);
    }
    if let Some(open_now) = place.opening_hours.and_then(|h| h.open_now) {
        station = station.with_open_now(open_now);
    }

    Some(station)
}

/// Filters out businesses the provider tags as gas stations that are
/// primarily something else (convenience stores, coffee shops, ...).
fn is_primarily_fuel_station(name: &str, types: &[String]) -> bool {
    if !types.iter().any(|t| t == PLACE_TYPE) {
        return false;
    }

    let name_lower = name.to_lowercase();
    let excluded = EXCLUDED_NAME_KEYWORDS
        .iter()
        .any(|keyword| name_lower.contains(keyword));

    !excluded || name_lower.contains("gas") || name_lower.contains("fuel")
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: Option<String>,
    name: Option<String>,
    vicinity: Option<String>,
    geometry: Geometry,
    rating: Option<f64>,
    #[serde(default)]
    types: Vec<String>,
    opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    open_now: Option<bool>,
}
