//! Web layer for the departure server.
//!
//! Turns `/{name}/{stop}/{direction}` requests into NexTrip queries and
//! answers with one rendered line per departure.

mod dto;
mod routes;
mod state;

pub use dto::DepartureQuery;
pub use routes::{AppError, USAGE, create_router};
pub use state::AppState;
