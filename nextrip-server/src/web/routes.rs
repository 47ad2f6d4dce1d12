//! HTTP route handlers.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{Direction, resolve_route};
use crate::format::{self, FormatError};
use crate::nextrip::NexTripError;

use super::dto::DepartureQuery;
use super::state::AppState;

/// Shown for any path that isn't a departures request.
pub const USAGE: &str = "Usage: /{name}/{stop}/{north|south|east|west}";

/// Body sent when the query was fine but nothing is leaving.
const NO_DEPARTURES: &str = "No upcoming departures.";

/// Body sent when NexTrip couldn't be queried.
const UPSTREAM_FAILURE: &str = "There was an issue. Please double check the name and direction.";

/// Body sent when rendering failed.
const FORMAT_FAILURE: &str = "There was an issue with your format.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/:name/:stop/:direction", get(next_departures))
        .route("/metro/:name/:stop/:direction", get(next_departures))
        .fallback(usage)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn usage() -> Response {
    AppError::BadRequest {
        message: USAGE.to_string(),
    }
    .into_response()
}

/// Next departures for a route at a stop, one rendered line each.
async fn next_departures(
    State(state): State<AppState>,
    Path((name, stop, direction)): Path<(String, String, String)>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let query: DepartureQuery = pairs.into_iter().collect();
    let route_id = resolve_route(&name);
    let direction = Direction::from_path(&direction);
    let format_id = query.format_id();

    let amount = query.amount();
    let count = usize::try_from(amount).map_err(|_| NexTripError::InvalidCount(amount))?;

    let departures = state
        .nextrip
        .fetch_next(&route_id, direction, &stop, count)
        .await?;

    let mut body = String::new();
    for departure in &departures {
        body.push_str(&format::render(format_id, departure)?);
        body.push('\n');
    }

    Ok((StatusCode::OK, body).into_response())
}

/// Application error type.
///
/// Every variant becomes a plain-text response.
#[derive(Debug)]
pub enum AppError {
    /// The request itself was unusable
    BadRequest { message: String },
    /// Nothing to show; not a failure
    NoDepartures,
    /// NexTrip couldn't be queried
    Upstream { message: String },
    /// A departure couldn't be rendered
    Format { message: String },
}

impl From<NexTripError> for AppError {
    fn from(e: NexTripError) -> Self {
        match e {
            NexTripError::NoDeparturesFound => AppError::NoDepartures,
            e if e.is_invalid_request() => AppError::BadRequest {
                message: e.to_string(),
            },
            e => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl From<FormatError> for AppError {
    fn from(e: FormatError) -> Self {
        AppError::Format {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest { message } => {
                debug!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message.as_str())
            }
            AppError::NoDepartures => {
                debug!("no upcoming departures");
                (StatusCode::OK, NO_DEPARTURES)
            }
            AppError::Upstream { message } => {
                warn!(%message, "upstream failure");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE)
            }
            AppError::Format { message } => {
                warn!(%message, "format failure");
                (StatusCode::INTERNAL_SERVER_ERROR, FORMAT_FAILURE)
            }
        };

        (status, format!("{body}\n")).into_response()
    }
}
