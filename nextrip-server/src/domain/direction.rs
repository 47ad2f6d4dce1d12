//! Travel direction.

use std::fmt;

/// One of the two travel directions NexTrip distinguishes per route.
///
/// NexTrip only knows direction `0` and `1` for a route; which compass
/// bearing each corresponds to depends on the route. North and east share
/// code `0`, south and west share code `1`.
///
/// # Examples
///
/// ```
/// use nextrip_server::domain::Direction;
///
/// assert_eq!(Direction::from_path("North"), Direction::NorthBound);
/// assert_eq!(Direction::from_path("east"), Direction::NorthBound);
/// assert_eq!(Direction::from_path("west"), Direction::SouthBound);
/// assert_eq!(Direction::NorthBound.code(), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Northbound or eastbound.
    NorthBound,
    /// Southbound or westbound.
    SouthBound,
}

impl Direction {
    /// Map a path segment to a direction.
    ///
    /// `north` and `east` (any case) are northbound. Everything else,
    /// including unrecognised text, is southbound.
    pub fn from_path(s: &str) -> Self {
        if s.eq_ignore_ascii_case("north") || s.eq_ignore_ascii_case("east") {
            Direction::NorthBound
        } else {
            Direction::SouthBound
        }
    }

    /// The direction ID used in NexTrip URLs.
    pub fn code(self) -> &'static str {
        match self {
            Direction::NorthBound => "0",
            Direction::SouthBound => "1",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
