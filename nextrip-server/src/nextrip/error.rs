//! NexTrip client error types.

/// Errors from fetching departures.
#[derive(Debug, thiserror::Error)]
pub enum NexTripError {
    /// The stop ID was empty
    #[error("invalid stop ID")]
    InvalidStop,

    /// Asked for too few or too many departures
    #[error("invalid amount {0}: must be between 1 and 3")]
    InvalidCount(i64),

    /// Request failed before a response arrived (network error, timeout, etc.)
    #[error("NexTrip unreachable: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    /// NexTrip returned a non-success status code
    #[error("NexTrip API returned status {status}: {message}")]
    UpstreamError { status: u16, message: String },

    /// Response body wasn't the JSON we expected
    #[error("failed to decode NexTrip response: {message}")]
    Decode { message: String },

    /// The configured base URL can't have paths appended to it
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The query was fine but nothing is leaving soon
    #[error("no upcoming departures found at this stop")]
    NoDeparturesFound,
}

impl NexTripError {
    /// Whether the error means NexTrip couldn't be queried, as opposed to
    /// a bad request or an empty result.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            NexTripError::UpstreamUnreachable(_)
                | NexTripError::UpstreamError { .. }
                | NexTripError::Decode { .. }
        )
    }

    /// Whether the caller supplied something unusable.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, NexTripError::InvalidStop | NexTripError::InvalidCount(_))
    }
}
