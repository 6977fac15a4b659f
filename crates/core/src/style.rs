//! Inline style and class derivation
//!
//! Pure functions from state snapshots to the attribute strings the view
//! binds. Same state and theme always give the same string.

use crate::interaction::{HighlightState, StyleToggleState};
use crate::theme::Theme;

/// Inline style that keeps a block permanently hidden
pub const HIDDEN: &str = "display: none;";

/// Base class of the box container
pub const CONTAINER_CLASS: &str = "container";

/// Container class with the `show` modifier
pub const CONTAINER_SHOWN_CLASS: &str = "container show";

/// Inline style of the style toggle label
#[must_use]
pub fn label_style(state: StyleToggleState, theme: &Theme) -> String {
    if state.hover() {
        format!("color: {}; cursor: pointer;", theme.link_hover)
    } else {
        format!("color: {};", theme.link)
    }
}

/// Class attribute of the style toggle container
#[must_use]
pub const fn container_class(state: StyleToggleState) -> &'static str {
    if state.show_box() {
        CONTAINER_SHOWN_CLASS
    } else {
        CONTAINER_CLASS
    }
}

/// Inline style of the highlight headline.
///
/// Only properties some event has set are emitted; the untouched headline
/// gets an empty style.
#[must_use]
pub fn headline_style(state: HighlightState, theme: &Theme) -> String {
    let background = state
        .background()
        .map(|paint| format!("background: {};", theme.paint(paint)));
    let color = state
        .color()
        .map(|paint| format!("color: {};", theme.paint(paint)));

    background
        .into_iter()
        .chain(color)
        .collect::<Vec<_>>()
        .join(" ")
}
