//! # meditrack-client
//!
//! Leptos frontend for the MediTrack healthcare records application.
//!
//! This crate contains the router, the home and login/sign-up screens, the
//! form widgets they share, and the account types declared for a future
//! backend. It is rendered on the server by `meditrack-server` and hydrated
//! in the browser from the WASM build of this crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: attach event handlers to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
