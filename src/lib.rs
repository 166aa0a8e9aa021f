// lib.rs - Root module for the storefront library
//
// The web_app module holds the Leptos application (pages, components,
// server functions). Fixtures are only built for database tooling.

/// The fixtures module contains reusable test data and database setup
#[cfg(feature = "db-tools")]
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrates the server-rendered body
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
