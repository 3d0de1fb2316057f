//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`auth` forms, `chat`) so each controller owns
//! one small model and components derive their rendering from it.

pub mod auth;
pub mod chat;
