//! Networking modules for the chat and auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema, `service` the trait seam the
//! controllers depend on, and `api` the `gloo-net` implementations used in
//! the browser.

pub mod api;
pub mod service;
pub mod types;
