//! Conversion from NexTrip DTOs to domain departures.
//!
//! Filtering happens here rather than in the client so it can be tested
//! against fixed payloads and a fixed clock.

use chrono::{DateTime, Local};

use crate::domain::Departure;

use super::error::NexTripError;
use super::types::{NexTripDeparture, NexTripResponse};

/// Most departures a single request may ask for.
pub const MAX_DEPARTURES: usize = 3;

/// Check the arguments of a departure query.
pub(crate) fn validate_query(stop_id: &str, count: usize) -> Result<(), NexTripError> {
    if stop_id.is_empty() {
        return Err(NexTripError::InvalidStop);
    }

    if !(1..=MAX_DEPARTURES).contains(&count) {
        return Err(NexTripError::InvalidCount(
            i64::try_from(count).unwrap_or(i64::MAX),
        ));
    }

    Ok(())
}

/// Pick the next `count` departures from a NexTrip response.
///
/// Departures that left before `now` (Unix seconds) are skipped; one
/// leaving exactly at `now` is kept. NexTrip's ordering is preserved.
///
/// # Errors
///
/// `InvalidStop`/`InvalidCount` for unusable arguments, and
/// `NoDeparturesFound` when nothing is left after filtering.
pub fn select_departures(
    response: NexTripResponse,
    stop_id: &str,
    count: usize,
    now: i64,
) -> Result<Vec<Departure>, NexTripError> {
    validate_query(stop_id, count)?;

    // NexTrip can return more than one stop; the last one wins
    let stop_name = response
        .stops
        .into_iter()
        .next_back()
        .map(|s| s.description)
        .unwrap_or_default();
    let short_stop_name = stop_id.to_uppercase();

    let departures: Vec<Departure> = response
        .departures
        .into_iter()
        .filter(|d| d.departure_time >= now)
        .take(count)
        .map(|d| convert_departure(d, &stop_name, &short_stop_name))
        .collect();

    if departures.is_empty() {
        return Err(NexTripError::NoDeparturesFound);
    }

    Ok(departures)
}

fn convert_departure(dep: NexTripDeparture, stop_name: &str, short_stop_name: &str) -> Departure {
    Departure {
        name: dep.route_short_name,
        stop_name: stop_name.to_string(),
        short_stop_name: short_stop_name.to_string(),
        direction: dep.direction_text,
        departure_text: dep.departure_text,
        scheduled_time: format_scheduled_time(dep.departure_time),
    }
}

/// Format a Unix timestamp as `YYYY-MM-DD HH:MM +hh:mm` in local time.
///
/// The zone is the numeric UTC offset; chrono has no abbreviation for `Local`.
fn format_scheduled_time(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M %:z").to_string())
        .unwrap_or_default()
}
