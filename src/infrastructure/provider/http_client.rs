//! # HTTP Client Utilities
//!
//! Thin reqwest wrapper used by provider adapters.
//!
//! Applies a fixed per-request timeout and maps transport and status
//! failures into [`ProviderError`]. There is no automatic retry: a retry
//! would double user-visible latency for a request the client can itself
//! re-issue.

use crate::infrastructure::provider::error::{ProviderError, ProviderResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for provider adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unavailable` if the underlying client cannot
    /// be constructed.
    pub fn new(timeout_ms: u64) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                ProviderError::unavailable(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unavailable` if the request fails at the
    /// transport layer, `ProviderError::Rejected` for client-error statuses
    /// and `ProviderError::Malformed` if the body cannot be decoded.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }
}

/// Handles the HTTP response, checking status and deserializing JSON.
async fn handle_response<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::malformed(format!("failed to parse response: {e}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &body))
    }
}

/// Maps a reqwest error to a provider error.
fn map_reqwest_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::unavailable("request timed out")
    } else if error.is_connect() {
        ProviderError::unavailable(format!("connection failed: {error}"))
    } else {
        ProviderError::unavailable(format!("HTTP request failed: {error}"))
    }
}

/// Maps an HTTP status code to a provider error.
fn map_status_error(status: StatusCode, body: &str) -> ProviderError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => ProviderError::rejected("provider quota exceeded"),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            ProviderError::unavailable(format!("server error ({status}): {body}"))
        }
        _ => ProviderError::rejected(format!("HTTP error ({status}): {body}")),
    }
}
