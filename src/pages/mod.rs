//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page builds its controller from the `ClientConfig` context and
//! delegates rendering details to `components`.

pub mod chat;
pub mod login;
pub mod register;
