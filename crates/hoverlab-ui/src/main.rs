//! WASM entry point for the Leptos CSR app
//!
//! This is the main entry point that Trunk compiles to WASM.

use hoverlab_ui::app::mount;
use hoverlab_ui::logging::{default_level, init_logging};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    if let Err(e) = init_logging(default_level()) {
        web_sys::console::error_1(&e.to_string().into());
    }

    if let Err(e) = mount() {
        tracing::error!("{e}");
    }
}
