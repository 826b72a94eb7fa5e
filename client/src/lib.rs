//! # client
//!
//! Leptos + WASM frontend for the calculation OAuth demo.
//!
//! The crate owns the browser side of sign-in: reading tokens off the OAuth
//! callback URL, persisting them to cookies and local storage, fetching the
//! user profile with a bearer token, and tearing the session down on logout.
//! Pages and the header are thin views over `session::context::AuthContext`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
