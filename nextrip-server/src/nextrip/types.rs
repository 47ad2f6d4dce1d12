//! NexTrip API response DTOs.
//!
//! These map directly onto the NexTrip JSON. Fields we don't use are not
//! declared; fields we do use default to empty when NexTrip leaves them out
//! or sends `null`.

use serde::{Deserialize, Deserializer};

/// Read `null` as the type's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response from `GET /nextrip/{route}/{direction}/{stop}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NexTripResponse {
    /// Stops matching the query. Usually exactly one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stops: Vec<NexTripStop>,

    /// Upcoming departures, in predicted order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub departures: Vec<NexTripDeparture>,
}

/// A stop on the response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NexTripStop {
    /// Human-readable stop name, e.g. "Target Field Station Platform 2".
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// A predicted departure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NexTripDeparture {
    /// Route ID, e.g. "901".
    #[serde(default, deserialize_with = "null_as_default")]
    pub route_id: String,

    /// Route short name, e.g. "Blue".
    #[serde(default, deserialize_with = "null_as_default")]
    pub route_short_name: String,

    /// Direction code, e.g. "NB".
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction_text: String,

    /// Countdown or clock time, e.g. "5 Min" or "10:42".
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_text: String,

    /// Predicted departure as Unix seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_time: i64,

    /// Destination sign text, e.g. "to Mall of America".
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}
