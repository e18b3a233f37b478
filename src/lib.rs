//! # mailboard
//!
//! Leptos + WASM admin dashboard for an email-marketing service: a thin
//! presentation layer over the remote campaign REST API. Paginated campaign
//! history with optimistic edit/delete, per-campaign launch actions, and a
//! notifications list. All business rules (validation, sending, delivery)
//! live server-side.
//!
//! State machines live in `state` as plain structs so they test natively;
//! browser-only code (`gloo-net`, `web-sys`) is gated behind the `hydrate`
//! feature with inert fallbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
