//! # authgate
//!
//! Leptos + WASM client demonstrating route-guarded authentication.
//!
//! A persisted session store feeds an auth controller, a pure access gate
//! decides what a protected route may show, and an ordered route table maps
//! paths to pages. Login is simulated: the user record is constructed locally
//! and mirrored into `localStorage`.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routing;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the logger is already set.
    let _ = console_log::init_with_level(config::LOG_LEVEL);
    leptos::mount::mount_to_body(app::App);
}
