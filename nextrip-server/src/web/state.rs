//! Application state for the web layer.

use std::sync::Arc;

use crate::nextrip::NexTripClient;

/// Shared application state.
///
/// Only the upstream client lives here; templates and route aliases are
/// static.
#[derive(Clone)]
pub struct AppState {
    /// NexTrip API client
    pub nextrip: Arc<NexTripClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(nextrip: NexTripClient) -> Self {
        Self {
            nextrip: Arc::new(nextrip),
        }
    }
}
