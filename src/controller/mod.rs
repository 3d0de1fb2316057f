//! Controllers that drive the send and submit pipelines.
//!
//! ARCHITECTURE
//! ============
//! A controller owns one `RwSignal` of page state plus its injected
//! service, clock and (for forms) navigator. Pages build one per mount and
//! forward DOM events to it; components only read the signal.

pub mod chat;
pub mod form;
