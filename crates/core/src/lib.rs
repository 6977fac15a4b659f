//! Pure interaction state for the hoverlab front-end.
//!
//! Every component on the page keeps a small `Copy` snapshot of its UI state
//! and replaces it on each pointer event with the result of a pure reducer.
//! Nothing in this crate touches the DOM, so every transition is testable
//! natively.
//!
//! ## Module Structure
//! - `interaction`: pointer events, the `Interaction` trait and per-component states
//! - `style`: inline style and class derivation from state snapshots
//! - `theme`: color configuration loaded from TOML
//! - `error` / `result`: error type and `Result` alias

pub mod error;
pub mod interaction;
pub mod result;
pub mod style;
pub mod theme;

pub use error::Error;
pub use interaction::{
    HighlightState, HoverToggleState, Interaction, Paint, PointerEvent, StyleTarget,
    StyleToggleState,
};
pub use result::{Result, ResultExt};
pub use theme::Theme;
