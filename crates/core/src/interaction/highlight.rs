//! Headline highlight state
//!
//! Records which paints are applied to the headline instead of writing styles
//! onto the element. Properties stay unset until the first event touches them.

use super::{Interaction, PointerEvent};

/// Named theme color applied to a style property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Background while the pointer is over the headline
    Highlight,
    /// Text color set together with the highlight
    Contrast,
    /// Background after the pointer leaves
    Rest,
}

/// Paints currently applied to the headline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightState {
    background: Option<Paint>,
    color: Option<Paint>,
}

impl HighlightState {
    /// Paint on the background, if any event has set one
    #[must_use]
    pub const fn background(self) -> Option<Paint> {
        self.background
    }

    /// Paint on the text, set only by pointer-over
    #[must_use]
    pub const fn color(self) -> Option<Paint> {
        self.color
    }
}

impl Interaction for HighlightState {
    type Event = PointerEvent;

    fn apply(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Over => Self {
                background: Some(Paint::Highlight),
                color: Some(Paint::Contrast),
            },
            // text color is left as is
            PointerEvent::Leave => Self {
                background: Some(Paint::Rest),
                ..self
            },
            PointerEvent::Enter => self,
        }
    }
}
