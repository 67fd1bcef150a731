//! Entry point for the WASM application

use leptos::*;
use sheet_relay_frontend::{App, LOG_LEVEL};

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 Sheet Relay - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
