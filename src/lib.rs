//! Curo24 web client.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-side Leptos application for the Curo24 healthcare portal. The
//! `session` modules own login state and its persisted copy; `util::auth`
//! decides whether a protected route may render; pages and components are
//! the presentation shell around that core.
//!
//! Compiled with the `csr` feature for the browser (WASM) and with no
//! features for native test runs, where browser APIs are stubbed.

pub mod app;
pub mod components;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
