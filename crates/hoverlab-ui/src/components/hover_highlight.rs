//! Headline highlighted under the pointer

use hoverlab_core::style::{HIDDEN, headline_style};
use hoverlab_core::{HighlightState, Interaction, PointerEvent, Theme};
use leptos::prelude::*;

/// Headline whose colors follow `HighlightState`, plus a block that is
/// rendered but never shown
#[component]
pub fn HoverHighlight() -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (state, set_state) = signal(HighlightState::default());

    let on_pointer = move |event: PointerEvent| {
        set_state.update(|current| {
            *current = current.apply(event);
            tracing::debug!(
                %event,
                background = ?current.background(),
                color = ?current.color(),
                "highlight"
            );
        });
    };

    view! {
        <div class="hover-highlight">
            <h2
                style=move || headline_style(state.get(), &theme)
                on:mouseover=move |_| on_pointer(PointerEvent::Over)
                on:mouseleave=move |_| on_pointer(PointerEvent::Leave)
            >
                "Hover over me!"
            </h2>
            <div style=HIDDEN>
                <p>"show 1"</p>
                <p>"show 2"</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_highlight_component_exists() {
        let _component = HoverHighlight;
        assert_eq!(HIDDEN, "display: none;");
    }
}
