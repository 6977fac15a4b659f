//! Hover-revealed list

use hoverlab_core::{HoverToggleState, Interaction, PointerEvent};
use leptos::prelude::*;

/// Lines shown while the region is hovered, in render order
pub const HOVER_LIST_ITEMS: [&str; 3] = ["Farmer's market", "About us", "Contact us"];

/// Region that reveals a list while hovered
///
/// Enter and leave both invert the flag; see `HoverToggleState`.
#[component]
pub fn HoverToggle() -> impl IntoView {
    let (state, set_state) = signal(HoverToggleState::default());

    let on_pointer = move |event: PointerEvent| {
        set_state.update(|current| {
            *current = current.apply(event);
            tracing::debug!(%event, is_hovering = current.is_hovering(), "hover toggle");
        });
    };

    let [market, about, contact] = HOVER_LIST_ITEMS;

    view! {
        <div class="hover-toggle">
            <div
                class="hover-region"
                on:mouseenter=move |_| on_pointer(PointerEvent::Enter)
                on:mouseleave=move |_| on_pointer(PointerEvent::Leave)
            >
                "Hover Me"
            </div>
            <Show when=move || state.get().is_hovering()>
                <li class="box-hover">
                    {market}
                    <ul>{about}</ul>
                    <ul>{contact}</ul>
                </li>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_toggle_component_exists() {
        let _component = HoverToggle;
    }

    #[test]
    fn test_list_items() {
        assert_eq!(HOVER_LIST_ITEMS, ["Farmer's market", "About us", "Contact us"]);
    }
}
