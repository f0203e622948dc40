//! Device console - Leptos frontend
//!
//! Claim and release hackathon devices, launch their simulator, and push
//! display commands, against backends discovered at runtime.

pub mod api;
pub mod app;
pub mod auth;
pub mod browser;
pub mod claims;
pub mod commands;
pub mod components;
pub mod endpoints;
pub mod error;
pub mod io;
pub mod service;

pub use app::App;
pub use error::{ApiError, Result};

/// Hydration entry point for the WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::hydrate_body(App);
}
