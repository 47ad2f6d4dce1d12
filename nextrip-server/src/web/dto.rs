//! Request types for the web layer.

use crate::format::{DEFAULT_FORMAT, is_valid_format};

/// Departures returned when `amount` is missing or unparseable.
pub const DEFAULT_AMOUNT: i64 = 1;

/// Query string of a departures request.
///
/// Both parameters are kept as raw strings so that garbage falls back to a
/// default instead of rejecting the request. Built from the decoded
/// key/value pairs; when a key repeats, the first value wins.
#[derive(Debug, Default)]
pub struct DepartureQuery {
    /// Format ID, see `crate::format::FORMATS`
    pub format: Option<String>,

    /// How many departures to show
    pub amount: Option<String>,
}

impl FromIterator<(String, String)> for DepartureQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "format" => &mut query.format,
                "amount" => &mut query.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl DepartureQuery {
    /// The requested format, or the default if it's missing, unparseable
    /// or unknown.
    pub fn format_id(&self) -> u32 {
        self.format
            .as_deref()
            .and_then(|f| f.trim().parse().ok())
            .filter(|&id| is_valid_format(id))
            .unwrap_or(DEFAULT_FORMAT)
    }

    /// The requested number of departures, or the default if it's missing
    /// or not an integer.
    ///
    /// Out-of-range numbers, negative ones included, are returned as-is for
    /// the client to reject.
    pub fn amount(&self) -> i64 {
        self.amount
            .as_deref()
            .and_then(|a| a.trim().parse().ok())
            .unwrap_or(DEFAULT_AMOUNT)
    }
}
