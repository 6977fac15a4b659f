//! Leptos 0.7 CSR front-end for hoverlab
//!
//! A single page composing small interaction demos: a CSS-styled button, a
//! hover-revealed list, hover/toggle styling and a highlighted headline.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Component state lives in `hoverlab-core` snapshots held by signals
//!
//! ## Module Structure
//! - `app`: root component, theme loading and mounting
//! - `components`: the interaction components
//! - `logging`: browser console tracing subscriber
//! - `error`: error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod logging;

// Re-exported for callers mounting the page themselves
pub use app::App;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _app = App;
        let _button = components::ClickButton;
        let _toggle = components::HoverToggle;
        let _style = components::StyleToggle;
        let _highlight = components::HoverHighlight;
    }

    #[test]
    fn test_package_metadata_inherited_from_workspace() {
        assert_eq!(env!("CARGO_PKG_NAME"), "hoverlab-ui");
        assert_eq!(env!("CARGO_PKG_LICENSE"), "MIT");
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "hoverlab contributors");
    }

    #[test]
    fn test_error_types() {
        use error::UiError;
        let err = UiError::MountFailed("no body".to_string());
        assert!(err.to_string().contains("mount failed"));
    }
}
