// lib.rs - Root module for the saffron_storefront library
//
// Everything lives under `web_app`. The framework-free layers (model, api,
// stores, UI state) always compile; the Leptos components only compile with
// the `ssr` or `hydrate` feature.

pub mod web_app;

/// WASM entry point used by cargo-leptos for client-side hydration
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
