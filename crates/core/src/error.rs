//! Core error types for hoverlab.
//!
//! The interaction reducers are infallible; errors only arise at the
//! configuration edge.

use thiserror::Error;

/// Core error type for hoverlab operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("theme parse error: {reason}")]
    ThemeParseFailed { reason: String },

    #[error("invalid color for '{field}': {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

impl Error {
    /// Create a theme parse error.
    pub fn theme_parse_failed(reason: impl Into<String>) -> Self {
        Self::ThemeParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field,
            value: value.into(),
        }
    }
}
