//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat and auth surfaces from page state provided as
//! Leptos context and report user actions through `Callback` props.

pub mod auth_banner;
pub mod auth_form;
pub mod celebration;
pub mod composer;
pub mod crisis_panel;
pub mod form_field;
pub mod mood_selector;
pub mod transcript;
