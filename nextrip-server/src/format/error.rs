//! Formatter error types.

/// Errors from rendering a departure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No template is registered under this ID
    #[error("unknown format type: {0}")]
    UnknownFormat(u32),
}
