//! NexTrip HTTP client.
//!
//! One GET per query, no caching, no retries. The request timeout is the
//! only bound on how long a query can take.

use std::time::Instant;

use chrono::Utc;
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, info, instrument, warn};

use crate::domain::{Departure, Direction};

use super::convert::{select_departures, validate_query};
use super::error::NexTripError;
use super::types::NexTripResponse;

/// Default base URL for the NexTrip API.
pub const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org/nextrip";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 7;

/// Configuration for the NexTrip client.
#[derive(Debug, Clone)]
pub struct NexTripConfig {
    /// Base URL for the API (defaults to production NexTrip)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NexTripConfig {
    /// Create a config pointing at production NexTrip.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NexTripConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// NexTrip API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NexTripClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NexTripClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NexTripConfig) -> Result<Self, NexTripError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| NexTripError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(NexTripError::InvalidBaseUrl(config.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Build `{base}/{route}/{direction}/{stop}`, escaping each segment.
    fn departures_url(&self, route_id: &str, direction: Direction, stop_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([route_id, direction.code(), stop_id]);
        }
        url
    }

    /// Fetch the next `count` departures for a route, direction and stop.
    ///
    /// # Arguments
    ///
    /// * `route_id` - NexTrip route ID, e.g. "901" for the Blue Line
    /// * `direction` - Direction of travel
    /// * `stop_id` - Stop code, e.g. "TF2" for Target Field Station Platform 2
    /// * `count` - How many departures to return, 1 to 3
    ///
    /// Argument errors are reported before any request is made.
    #[instrument(skip(self, direction), fields(direction = direction.code()))]
    pub async fn fetch_next(
        &self,
        route_id: &str,
        direction: Direction,
        stop_id: &str,
        count: usize,
    ) -> Result<Vec<Departure>, NexTripError> {
        validate_query(stop_id, count)?;

        let url = self.departures_url(route_id, direction, stop_id);
        debug!(%url, "requesting departures");
        let start = Instant::now();

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(elapsed_ms = start.elapsed().as_millis(), "NexTrip request failed: {e}");
            NexTripError::from(e)
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "NexTrip returned an error");
            return Err(NexTripError::UpstreamError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let payload: NexTripResponse =
            serde_json::from_str(&body).map_err(|e| NexTripError::Decode {
                message: e.to_string(),
            })?;

        let departures = select_departures(payload, stop_id, count, Utc::now().timestamp())?;

        info!(
            elapsed_ms = start.elapsed().as_millis(),
            count = departures.len(),
            "fetched departures"
        );

        Ok(departures)
    }
}
