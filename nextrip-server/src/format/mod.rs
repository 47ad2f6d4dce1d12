//! Plain-text rendering of departures.
//!
//! A departure is rendered by picking one of a fixed set of templates and
//! substituting its `%`-prefixed placeholders. Placeholders are matched
//! case-insensitively, so `%dir`, `%Dir` and `%DIR` are equivalent.

mod error;
mod placeholder;
mod template;

pub use error::FormatError;
pub use placeholder::Placeholder;
pub use template::{DEFAULT_FORMAT, FORMATS, is_valid_format, render};
