//! Static CSS-styled button

use leptos::prelude::*;

/// Lookup identifier on the button wrapper
pub const BUTTON_TEST_ID: &str = "button";

/// Button styled entirely by the `.styled-button` rules
#[component]
pub fn ClickButton() -> impl IntoView {
    view! {
        <div data-testid=BUTTON_TEST_ID>
            <button class="styled-button">"Click this button"</button>
        </div>
    }
}
