//! Route alias lookup.

use std::borrow::Cow;

/// Common names for NexTrip route IDs.
///
/// Rail and BRT lines are better known by colour or letter than by number.
/// The E and F lines have no route of their own yet and share the C Line's
/// route ID.
pub const ROUTE_ALIASES: &[(&str, &str)] = &[
    ("BLUE", "901"),
    ("GREEN", "902"),
    ("RED", "903"),
    ("ORANGE", "904"),
    ("GOLD", "905"),
    ("A", "921"),
    ("B", "922"),
    ("C", "923"),
    ("D", "924"),
    ("E", "923"),
    ("F", "923"),
];

/// Resolve a route name to a NexTrip route ID.
///
/// Known aliases are matched case-insensitively. Anything else is assumed
/// to already be a route ID and is returned unchanged.
pub fn resolve_route(name: &str) -> Cow<'_, str> {
    ROUTE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
        .map(|(_, id)| Cow::Borrowed(*id))
        .unwrap_or(Cow::Borrowed(name))
}
