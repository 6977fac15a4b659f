//! Interaction components
//!
//! Each stateful component holds one `hoverlab-core` snapshot in a signal and
//! replaces it through `Interaction::apply` inside its event handlers.

pub mod click_button;
pub mod hover_highlight;
pub mod hover_toggle;
pub mod style_toggle;

pub use click_button::{BUTTON_TEST_ID, ClickButton};
pub use hover_highlight::HoverHighlight;
pub use hover_toggle::{HOVER_LIST_ITEMS, HoverToggle};
pub use style_toggle::StyleToggle;
