//! # client
//!
//! Leptos + WASM frontend for the task-manager login screen.
//!
//! This crate contains the login page, the `LoginForm` component, its local
//! state models, and the REST helper that talks to the authentication
//! endpoint. The `host` binary at the repository root renders it with SSR and
//! serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
