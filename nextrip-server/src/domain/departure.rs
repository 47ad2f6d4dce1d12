//! Upcoming departure.

/// A single upcoming departure at a stop.
///
/// Built by the NexTrip client for one request and consumed by the
/// formatter. `direction` and `departure_text` are passed through from the
/// API without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Route short name, e.g. "Blue" or "A".
    pub name: String,

    /// Full stop description from NexTrip, e.g. "Target Field Station Platform 2".
    pub stop_name: String,

    /// The stop ID the caller asked for, uppercased.
    pub short_stop_name: String,

    /// Raw direction text ("NB", "SB", "EB", "WB").
    pub direction: String,

    /// Raw countdown or clock time ("5 Min", "10:42").
    pub departure_text: String,

    /// Absolute departure time, `YYYY-MM-DD HH:MM TZ` in local time.
    pub scheduled_time: String,
}

impl Departure {
    /// Whether `departure_text` is a relative countdown rather than a clock time.
    ///
    /// NexTrip mixes both: "5 Min" for imminent departures, "10:42" for
    /// later ones.
    pub fn is_countdown(&self) -> bool {
        self.departure_text.contains("Min")
    }

    /// Whether this departure is on one of the light rail lines.
    ///
    /// Only the Blue and Green lines are trains; everything else NexTrip
    /// reports is a bus.
    pub fn is_train(&self) -> bool {
        let name = self.name.to_lowercase();
        name == "blue" || name == "green"
    }
}
