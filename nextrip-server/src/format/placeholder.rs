//! Template placeholders and their values.

use std::borrow::Cow;

use crate::domain::Departure;

/// Circle emojis for the lines that have a colour.
const LINE_COLORS: &[(&str, &str)] = &[
    ("gold", "🟡"),
    ("orange", "🟠"),
    ("red", "🔴"),
    ("green", "🟢"),
    ("blue", "🔵"),
];

/// Compass names for NexTrip's direction codes.
const DIRECTION_NAMES: &[(&str, &str)] = &[
    ("NB", "northbound"),
    ("SB", "southbound"),
    ("EB", "eastbound"),
    ("WB", "westbound"),
];

/// A variable that can appear in a format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `%NAME`: route short name
    Name,
    /// `%DIR`: spelled-out direction, e.g. "northbound"
    Dir,
    /// `%TYPE`: "Train" or "Bus"
    Type,
    /// `%STOP`: full stop description, lowercased
    Stop,
    /// `%TIME`: "in 5 Min" or "at 10:42"
    Time,
    /// `%SHORT_DIR`: raw direction code, e.g. "NB"
    ShortDir,
    /// `%SHORT_STOP`: the stop ID as requested, uppercased
    ShortStop,
    /// `%COLOR`: line colour emoji, or "N/A"
    Color,
}

impl Placeholder {
    /// Every placeholder, longest token first.
    ///
    /// Longer tokens come first so that a scanner trying them in order
    /// never stops at a shorter token that is a prefix of another.
    pub const ALL: [Placeholder; 8] = [
        Placeholder::ShortStop,
        Placeholder::ShortDir,
        Placeholder::Color,
        Placeholder::Name,
        Placeholder::Type,
        Placeholder::Stop,
        Placeholder::Time,
        Placeholder::Dir,
    ];

    /// The token name without the leading `%`.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Name => "NAME",
            Placeholder::Dir => "DIR",
            Placeholder::Type => "TYPE",
            Placeholder::Stop => "STOP",
            Placeholder::Time => "TIME",
            Placeholder::ShortDir => "SHORT_DIR",
            Placeholder::ShortStop => "SHORT_STOP",
            Placeholder::Color => "COLOR",
        }
    }

    /// Look up a placeholder by token name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Compute the replacement text for this placeholder.
    pub fn value(self, departure: &Departure) -> Cow<'_, str> {
        match self {
            Placeholder::Name => Cow::Borrowed(departure.name.as_str()),
            Placeholder::ShortStop => Cow::Borrowed(departure.short_stop_name.as_str()),
            Placeholder::ShortDir => Cow::Borrowed(departure.direction.as_str()),
            Placeholder::Type => {
                if departure.is_train() {
                    Cow::Borrowed("Train")
                } else {
                    Cow::Borrowed("Bus")
                }
            }
            Placeholder::Stop => Cow::Owned(departure.stop_name.to_lowercase()),
            Placeholder::Color => {
                let name = departure.name.to_lowercase();
                let emoji = LINE_COLORS
                    .iter()
                    .find(|(color, _)| *color == name)
                    .map_or("N/A", |(_, emoji)| *emoji);
                Cow::Borrowed(emoji)
            }
            Placeholder::Time => {
                let prefix = if departure.is_countdown() { "in" } else { "at" };
                Cow::Owned(format!("{prefix} {}", departure.departure_text))
            }
            // Unknown codes render as nothing rather than failing
            Placeholder::Dir => Cow::Borrowed(
                DIRECTION_NAMES
                    .iter()
                    .find(|(code, _)| *code == departure.direction)
                    .map_or("", |(_, name)| *name),
            ),
        }
    }
}
