//! Browser console logging
//!
//! Installs a `tracing-subscriber` fmt subscriber whose writer forwards each
//! formatted event to `console.log`. Timestamps are off because
//! `std::time` is unavailable on `wasm32-unknown-unknown`.

use std::io;

use tracing::Level;
use wasm_bindgen::JsValue;

use crate::error::{Result, UiError};

/// Writer that sends formatted lines to the browser console
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = console_line(buf);
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Decodes a formatted event and strips the trailing newline.
#[must_use]
pub fn console_line(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).trim_end().to_string()
}

/// Level used when nothing else is requested
#[must_use]
pub const fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the console subscriber as the global default.
///
/// # Errors
///
/// Returns `UiError::LoggingInit` if a global subscriber is already set.
pub fn init_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(|| ConsoleWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| UiError::LoggingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line_strips_newline() {
        assert_eq!(console_line(b" INFO mounted\n"), " INFO mounted");
        assert_eq!(console_line(b"\n"), "");
    }

    #[test]
    fn test_console_line_is_lossy() {
        assert_eq!(console_line(&[0x66, 0xff, 0x6f]), "f\u{fffd}o");
    }

    #[test]
    fn test_default_level() {
        let expected = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };
        assert_eq!(default_level(), expected);
    }
}
