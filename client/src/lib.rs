//! # orkitt-client
//!
//! Leptos frontend for the Orkitt web skeleton: an in-memory auth session,
//! a route guard keyed on the session, and the page set that exercises both.
//!
//! The crate is compiled twice. With `ssr` it is rendered by the Axum host in
//! `server/`; with `hydrate` it is built to WASM and takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod paths;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
