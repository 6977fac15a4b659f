//! Result type definition and logging combinators.

use crate::error::Error;

/// The standard Result type for hoverlab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for falling back on failure without unwrap/expect.
pub trait ResultExt<T> {
    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default_logged() {
        let ok: Result<u8> = Ok(3);
        assert_eq!(ok.or_default_logged(7), 3);

        let err: Result<u8> = Err(Error::theme_parse_failed("bad"));
        assert_eq!(err.or_default_logged(7), 7);
    }

    #[test]
    fn test_or_default_logged_on_invalid_color() {
        let err: Result<&str> = Err(Error::invalid_color("link", ""));
        assert_eq!(err.or_default_logged("#000"), "#000");
    }
}
