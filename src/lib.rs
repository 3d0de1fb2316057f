//! # mindbloom-client
//!
//! Leptos + WASM front end for the MindBloom support chat.
//!
//! This crate contains the chat widget and the login/registration forms:
//! pages, components, observable state, the controllers that drive the send
//! and submit pipelines, and the REST client for `/api/chat`, `/login` and
//! `/register`.
//!
//! ARCHITECTURE
//! ============
//! Controllers own the pipelines and write into `RwSignal` state; views only
//! derive from that state. Controllers take their service client, clock and
//! navigator as constructor parameters, so tests drive them with doubles and
//! no DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
