//! Label hover styling and box container toggle

use hoverlab_core::style::{container_class, label_style};
use hoverlab_core::{Interaction, PointerEvent, StyleTarget, StyleToggleState, Theme};
use leptos::prelude::*;

/// Styled label, decorative square and a container whose class flips on enter
#[component]
pub fn StyleToggle() -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (state, set_state) = signal(StyleToggleState::default());

    let on_pointer = move |target: StyleTarget, event: PointerEvent| {
        set_state.update(|current| {
            *current = current.apply((target, event));
            tracing::debug!(
                ?target,
                %event,
                hover = current.hover(),
                show_box = current.show_box(),
                "style toggle"
            );
        });
    };

    view! {
        <div class="style-toggle">
            <p
                style=move || label_style(state.get(), &theme)
                on:mouseenter=move |_| on_pointer(StyleTarget::Label, PointerEvent::Enter)
                on:mouseleave=move |_| on_pointer(StyleTarget::Label, PointerEvent::Leave)
            >
                "toggle"
            </p>
            // hover color comes from CSS only
            <div class="square">"square text"</div>
            <div
                class=move || container_class(state.get())
                on:mouseenter=move |_| on_pointer(StyleTarget::Container, PointerEvent::Enter)
                on:mouseleave=move |_| on_pointer(StyleTarget::Container, PointerEvent::Leave)
            >
                <div class="wrapper">
                    <div class="innerBox"></div>
                </div>
            </div>
        </div>
    }
}
