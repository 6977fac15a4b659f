//! Pointer-driven state transitions
//!
//! Each component state is an immutable snapshot. Handlers never mutate it in
//! place; they replace it with `state.apply(event)`.

pub mod highlight;
pub mod hover_toggle;
pub mod style_toggle;

pub use highlight::{HighlightState, Paint};
pub use hover_toggle::HoverToggleState;
pub use style_toggle::{StyleTarget, StyleToggleState};

use std::fmt;

/// Pointer events a component can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Pointer crossed into the element (does not bubble)
    Enter,
    /// Pointer crossed out of the element (does not bubble)
    Leave,
    /// Pointer moved onto the element or one of its children (bubbles)
    Over,
}

impl PointerEvent {
    /// DOM event name for this pointer event
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
            Self::Over => "mouseover",
        }
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

/// A component-local state driven by a pure reducer.
///
/// `Default` is the initial state. Events the component does not listen to
/// must return the state unchanged.
pub trait Interaction: Copy + Default {
    /// Event type the reducer is keyed by
    type Event: Copy;

    /// Returns the state after `event`.
    #[must_use]
    fn apply(self, event: Self::Event) -> Self;

    /// Folds a sequence of events over `self`.
    #[must_use]
    fn replay<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = Self::Event>,
    {
        events.into_iter().fold(self, Self::apply)
    }
}
