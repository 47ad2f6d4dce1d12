//! Format templates and rendering.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::Departure;

use super::error::FormatError;
use super::placeholder::Placeholder;

/// Format used when the caller doesn't ask for one, or asks for one that
/// doesn't exist.
pub const DEFAULT_FORMAT: u32 = 0;

/// Built-in response formats, from most to least verbose.
pub const FORMATS: &[(u32, &str)] = &[
    (0, "There's a %DIR %NAME %TYPE coming to %STOP %TIME."),
    (1, "%DIR %NAME %TYPE at %STOP %TIME."),
    (2, "%SHORT_DIR %COLOR %TYPE: %SHORT_STOP %TIME."),
    (3, "%COLOR %SHORT_DIR @ %SHORT_STOP %TIME"),
];

/// Matches any known placeholder, case-insensitively.
///
/// Alternatives are tried in `Placeholder::ALL` order, longest first, so
/// `%SHORT_STOP` is never read as `%SHORT` followed by junk.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<&str> = Placeholder::ALL.iter().map(|p| p.name()).collect();
    let pattern = format!("(?i)%({})", names.join("|"));
    Regex::new(&pattern).expect("placeholder names are plain identifiers")
});

fn template(format_id: u32) -> Option<&'static str> {
    FORMATS
        .iter()
        .find(|(id, _)| *id == format_id)
        .map(|(_, template)| *template)
}

/// Check whether a format ID refers to a built-in template.
///
/// Callers use this to fall back to [`DEFAULT_FORMAT`] instead of failing
/// the request.
pub fn is_valid_format(format_id: u32) -> bool {
    template(format_id).is_some()
}

/// Render a departure with the given format.
///
/// All placeholders are substituted in one pass over the template, so the
/// result doesn't depend on substitution order and replacement text is
/// never scanned for further placeholders.
///
/// # Examples
///
/// ```
/// use nextrip_server::domain::Departure;
/// use nextrip_server::format::render;
///
/// let dep = Departure {
///     name: "Blue".into(),
///     stop_name: "Target Field Station 2".into(),
///     short_stop_name: "TF2".into(),
///     direction: "NB".into(),
///     departure_text: "5 Min".into(),
///     scheduled_time: String::new(),
/// };
///
/// assert_eq!(
///     render(1, &dep).unwrap(),
///     "northbound Blue Train at target field station 2 in 5 Min."
/// );
/// assert!(render(99, &dep).is_err());
/// ```
pub fn render(format_id: u32, departure: &Departure) -> Result<String, FormatError> {
    let template = template(format_id).ok_or(FormatError::UnknownFormat(format_id))?;

    let rendered = PLACEHOLDER_RE.replace_all(template, |caps: &Captures| {
        // The pattern only admits known names
        Placeholder::from_name(&caps[1])
            .map(|p| p.value(departure).into_owned())
            .unwrap_or_else(|| caps[0].to_string())
    });

    Ok(rendered.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_line() -> Departure {
        Departure {
            name: "Blue".into(),
            stop_name: "Target Field Station 2".into(),
            short_stop_name: "TF2".into(),
            direction: "NB".into(),
            departure_text: "5 Min".into(),
            scheduled_time: "2026-10-18 08:05 +00:00".into(),
        }
    }

    fn route_21() -> Departure {
        Departure {
            name: "21".into(),
            stop_name: "Lake St & Hennepin Ave".into(),
            short_stop_name: "LAHE".into(),
            direction: "WB".into(),
            departure_text: "10:42".into(),
            scheduled_time: "2026-10-18 10:42 +00:00".into(),
        }
    }

    #[test]
    fn format_0() {
        assert_eq!(
            render(0, &blue_line()).unwrap(),
            "There's a northbound Blue Train coming to target field station 2 in 5 Min."
        );
        assert_eq!(
            render(0, &route_21()).unwrap(),
            "There's a westbound 21 Bus coming to lake st & hennepin ave at 10:42."
        );
    }

    #[test]
    fn format_1() {
        assert_eq!(
            render(1, &blue_line()).unwrap(),
            "northbound Blue Train at target field station 2 in 5 Min."
        );
    }

    #[test]
    fn format_2() {
        assert_eq!(
            render(2, &blue_line()).unwrap(),
            "NB 🔵 Train: TF2 in 5 Min."
        );
        assert_eq!(render(2, &route_21()).unwrap(), "WB N/A Bus: LAHE at 10:42.");
    }

    #[test]
    fn format_3() {
        assert_eq!(render(3, &blue_line()).unwrap(), "🔵 NB @ TF2 in 5 Min");
    }

    #[test]
    fn unknown_format() {
        assert_eq!(
            render(4, &blue_line()),
            Err(FormatError::UnknownFormat(4))
        );
        assert_eq!(
            render(u32::MAX, &blue_line()),
            Err(FormatError::UnknownFormat(u32::MAX))
        );
    }

    #[test]
    fn valid_formats() {
        for id in 0..4 {
            assert!(is_valid_format(id));
        }
        assert!(!is_valid_format(4));
        assert!(!is_valid_format(100));
        assert!(is_valid_format(DEFAULT_FORMAT));
    }

    #[test]
    fn unknown_direction_renders_empty() {
        let mut dep = blue_line();
        dep.direction = "XX".into();
        assert_eq!(
            render(1, &dep).unwrap(),
            " Blue Train at target field station 2 in 5 Min."
        );
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        let mut dep = blue_line();
        dep.name = "%STOP".into();
        assert_eq!(
            render(3, &dep).unwrap(),
            "N/A NB @ TF2 in 5 Min"
        );
        assert!(render(1, &dep).unwrap().contains("%STOP Bus"));
    }

    #[test]
    fn placeholders_match_any_case() {
        let dep = blue_line();
        let rendered = PLACEHOLDER_RE.replace_all("%dir %Short_Stop %sToP %color", |caps: &Captures| {
            Placeholder::from_name(&caps[1])
                .map(|p| p.value(&dep).into_owned())
                .unwrap_or_default()
        });
        assert_eq!(rendered, "northbound TF2 target field station 2 🔵");
    }

    #[test]
    fn unknown_tokens_left_alone() {
        let matched: Vec<_> = PLACEHOLDER_RE
            .find_iter("100% %WHEN %% %SHORT")
            .map(|m| m.as_str().to_string())
            .collect();
        assert!(matched.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Field text that never contains a `%`
    fn field() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 :&]{0,24}"
    }

    fn departure() -> impl Strategy<Value = Departure> {
        (field(), field(), field(), field(), field()).prop_map(
            |(name, stop_name, short_stop_name, direction, departure_text)| Departure {
                name,
                stop_name,
                short_stop_name,
                direction,
                departure_text,
                scheduled_time: String::new(),
            },
        )
    }

    proptest! {
        /// Every built-in format leaves no placeholder behind
        #[test]
        fn no_placeholders_remain(dep in departure(), idx in 0..FORMATS.len()) {
            let (id, _) = FORMATS[idx];
            let rendered = render(id, &dep).unwrap();
            prop_assert!(!rendered.contains('%'), "{rendered}");
        }

        /// IDs outside the table are always rejected
        #[test]
        fn unknown_ids_rejected(dep in departure(), id in 4u32..) {
            prop_assert_eq!(render(id, &dep), Err(FormatError::UnknownFormat(id)));
            prop_assert!(!is_valid_format(id));
        }

        /// Anything that isn't Blue or Green is a bus
        #[test]
        fn other_lines_are_buses(dep in departure()) {
            let lower = dep.name.to_lowercase();
            prop_assume!(lower != "blue" && lower != "green");
            prop_assert_eq!(Placeholder::Type.value(&dep), "Bus");
        }

        /// Countdown texts read "in ...", clock times read "at ..."
        #[test]
        fn time_prefix(mut dep in departure(), minutes in 0u32..60, countdown in any::<bool>()) {
            dep.departure_text = if countdown {
                format!("{minutes} Min")
            } else {
                format!("10:{minutes:02}")
            };
            let rendered = render(3, &dep).unwrap();
            let expected_suffix = if countdown {
                format!("in {}", dep.departure_text)
            } else {
                format!("at {}", dep.departure_text)
            };
            prop_assert!(rendered.ends_with(&expected_suffix), "{rendered}");
        }

        /// Blue and Green in any case render as trains
        #[test]
        fn rail_lines_any_case(name in "[bB][lL][uU][eE]|[gG][rR][eE][eE][nN]") {
            let dep = Departure {
                name,
                stop_name: String::new(),
                short_stop_name: String::new(),
                direction: String::new(),
                departure_text: String::new(),
                scheduled_time: String::new(),
            };
            prop_assert_eq!(Placeholder::Type.value(&dep), "Train");
        }
    }
}
