//! Metro Transit NexTrip client.
//!
//! NexTrip serves real-time departure predictions for a route, direction
//! and stop. Key characteristics:
//! - Directions are `0` and `1` per route, not compass bearings
//! - `departure_text` mixes countdowns ("5 Min") and clock times ("10:42")
//! - Departures arrive in predicted order, but may include some that have
//!   already left

mod client;
mod convert;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use client::{NexTripClient, NexTripConfig};
pub use convert::{MAX_DEPARTURES, select_departures};
pub use error::NexTripError;
pub use types::{NexTripDeparture, NexTripResponse, NexTripStop};
