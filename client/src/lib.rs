//! # curator-client
//!
//! Leptos + WASM frontend for the content curation dashboard: login,
//! dashboard widgets, article review, and pipeline settings. The same crate
//! renders on the server (`ssr`) and hydrates in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
