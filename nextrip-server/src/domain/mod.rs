//! Domain types for the departure server.
//!
//! These are the validated, internal representations of NexTrip data.
//! The wire format lives in `crate::nextrip` and is converted into these
//! types before anything else sees it.

mod departure;
mod direction;
mod route;

pub use departure::Departure;
pub use direction::Direction;
pub use route::{ROUTE_ALIASES, resolve_route};
