//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, navigation)
//! and pure rules (validation, markdown) from page and component logic to
//! improve reuse and testability.

pub mod markdown;
pub mod navigation;
pub mod timer;
pub mod validation;
