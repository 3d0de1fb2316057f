//! Service seams between the controllers and the backend.
//!
//! The browser build talks HTTP through `api`; tests substitute recording
//! doubles. Futures are `!Send` because everything runs on the browser's
//! single-threaded event loop.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use async_trait::async_trait;

use super::types::{AuthReply, ChatReply, ChatRequest, LoginRequest, RegisterRequest};

/// Transport-level failure of a single request.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No answer arrived within the configured timeout.
    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u32 },

    /// HTTP is only available in the browser build.
    #[error("{endpoint} is not reachable outside the browser")]
    Unavailable { endpoint: String },
}

/// Chat backend: one request, one opaque reply.
#[async_trait(?Send)]
pub trait ChatService {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ServiceError>;
}

/// Auth backend for the login and registration forms.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, request: &LoginRequest) -> Result<AuthReply, ServiceError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthReply, ServiceError>;
}
