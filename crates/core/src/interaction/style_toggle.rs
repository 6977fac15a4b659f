//! Label hover style and container class toggles

use super::{Interaction, PointerEvent};

/// Element of the style toggle component that raised an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// The "toggle" text label
    Label,
    /// The nested box container
    Container,
}

/// Two independent flags of the style toggle component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleToggleState {
    hover: bool,
    show_box: bool,
}

impl StyleToggleState {
    /// Whether the label uses its hover style
    #[must_use]
    pub const fn hover(self) -> bool {
        self.hover
    }

    /// Whether the container carries the `show` modifier
    #[must_use]
    pub const fn show_box(self) -> bool {
        self.show_box
    }
}

impl Interaction for StyleToggleState {
    type Event = (StyleTarget, PointerEvent);

    fn apply(self, (target, event): (StyleTarget, PointerEvent)) -> Self {
        match (target, event) {
            (StyleTarget::Label, PointerEvent::Enter | PointerEvent::Leave) => Self {
                hover: !self.hover,
                ..self
            },
            // leave never resets the box
            (StyleTarget::Container, PointerEvent::Enter) => Self {
                show_box: !self.show_box,
                ..self
            },
            _ => self,
        }
    }
}
