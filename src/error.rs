//! Error types.
//!
//! Generation can only fail on a time string that does not match the
//! canonical `h:mm AM/PM` shape. Everything else (zero periods, reversed
//! breaks, overlapping breaks) degrades into well-defined output.

use thiserror::Error;

/// Result type for configuration I/O.
pub type Result<T> = std::result::Result<T, Error>;

/// A configured time string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed time '{value}': expected h:mm AM/PM ({source})")]
pub struct MalformedTimeError {
    /// The offending input, verbatim.
    pub value: String,
    /// Underlying parser failure.
    #[source]
    pub source: chrono::ParseError,
}

impl MalformedTimeError {
    pub(crate) fn new(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }
}

/// Errors raised while loading or saving a configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A time field is not in canonical form.
    #[error(transparent)]
    MalformedTime(#[from] MalformedTimeError),

    /// Configuration JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
