//! Hover-revealed list state

use super::{Interaction, PointerEvent};

/// State of the hover-revealed list
///
/// Both enter and leave invert the flag rather than setting it, so a missed
/// leave event leaves the flag inverted until the next crossing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverToggleState {
    is_hovering: bool,
}

impl HoverToggleState {
    /// Whether the extra list content is shown
    #[must_use]
    pub const fn is_hovering(self) -> bool {
        self.is_hovering
    }
}

impl Interaction for HoverToggleState {
    type Event = PointerEvent;

    fn apply(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter | PointerEvent::Leave => Self {
                is_hovering: !self.is_hovering,
            },
            PointerEvent::Over => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_not_hovering() {
        assert!(!HoverToggleState::default().is_hovering());
    }

    #[test]
    fn test_enter_then_leave() {
        let entered = HoverToggleState::default().apply(PointerEvent::Enter);
        assert!(entered.is_hovering());

        let left = entered.apply(PointerEvent::Leave);
        assert!(!left.is_hovering());
    }

    #[test]
    fn test_double_enter_inverts_twice() {
        let state = HoverToggleState::default().replay([PointerEvent::Enter, PointerEvent::Enter]);
        assert!(!state.is_hovering());
    }

    #[test]
    fn test_over_is_ignored() {
        let state = HoverToggleState::default().apply(PointerEvent::Over);
        assert_eq!(state, HoverToggleState::default());
    }
}
