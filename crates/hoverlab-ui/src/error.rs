//! Error types for the hoverlab UI
//!
//! Rendering and event handling are infallible; these cover start-up.

use thiserror::Error;

/// Errors raised while starting the UI
#[derive(Debug, Error)]
pub enum UiError {
    /// The tracing subscriber could not be installed
    #[error("logging initialization failed: {0}")]
    LoggingInit(String),
    /// There was no element to mount the app into
    #[error("mount failed: {0}")]
    MountFailed(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
