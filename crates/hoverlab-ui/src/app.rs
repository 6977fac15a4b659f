//! Main application component
//!
//! The page is a static composition: components never share state.

use hoverlab_core::{ResultExt, Theme};
use leptos::mount::mount_to;
use leptos::prelude::*;

use crate::components::{ClickButton, HoverHighlight, HoverToggle, StyleToggle};
use crate::error::{Result, UiError};

/// Theme embedded at compile time
pub const THEME_TOML: &str = include_str!("../theme.toml");

/// Parses the embedded theme, falling back to the defaults on error.
#[must_use]
pub fn load_theme() -> Theme {
    Theme::from_toml_str(THEME_TOML).or_default_logged(Theme::default())
}

/// Main application component
///
/// Provides the theme to every component through context.
#[component]
pub fn App() -> impl IntoView {
    provide_context(load_theme());

    view! {
        <div class="App">
            <p>"Learning component testing with Leptos"</p>
            <ClickButton />
            <p>"event handlers driving component state"</p>
            <HoverToggle />
            <p>"simple css way"</p>
            <StyleToggle />
            <HoverHighlight />
            <p>"End to End testing"</p>
        </div>
    }
}

/// Mounts `App` into the document body for the lifetime of the page.
///
/// # Errors
///
/// Returns `UiError::MountFailed` when there is no window, document or body.
pub fn mount() -> Result<()> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .ok_or_else(|| UiError::MountFailed("document has no body".to_string()))?;

    mount_to(body, || view! { <App /> }).forget();
    tracing::info!("app mounted");
    Ok(())
}
