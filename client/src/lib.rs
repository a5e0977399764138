//! # client
//!
//! Leptos + WASM front-end for the Talachi Bank online-banking portal.
//!
//! This crate contains pages, components, application state, the typed REST
//! gateway to the banking API, and the browser session store that keeps the
//! access token and cached profile across page loads. Real authentication,
//! ledger, and SDitH signing work happens in the external backend; this crate
//! is the browser-side plumbing over it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
