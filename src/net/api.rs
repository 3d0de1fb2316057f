//! REST clients for the chat and auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! [`ServiceError::Unavailable`] since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The chat route must answer 2xx with a `{response}` body. The auth routes
//! report failure in the body (`success: false`), so their status code is
//! not inspected; only an undecodable body counts as a transport failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::service::{AuthService, ChatService, ServiceError};
use super::types::{AuthReply, ChatReply, ChatRequest, LoginRequest, RegisterRequest};
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
fn check_chat_status(ok: bool, status: u16) -> Result<(), ServiceError> {
    if ok { Ok(()) } else { Err(ServiceError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_error(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::Request(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_error(err: impl std::fmt::Display) -> ServiceError {
    ServiceError::Decode(err.to_string())
}

/// POST `body` as JSON to `endpoint` and return the raw response.
#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(endpoint: &str, body: &B) -> Result<gloo_net::http::Response, ServiceError> {
    gloo_net::http::Request::post(endpoint)
        .json(body)
        .map_err(request_error)?
        .send()
        .await
        .map_err(request_error)
}

#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(endpoint: &str, body: &B) -> Result<AuthReply, ServiceError> {
    let resp = post_json(endpoint, body).await?;
    resp.json::<AuthReply>().await.map_err(decode_error)
}

/// `ChatService` backed by `POST /api/chat`.
#[derive(Clone, Debug)]
pub struct HttpChatService {
    endpoint: String,
}

impl HttpChatService {
    pub fn new(config: &ClientConfig) -> Self {
        Self { endpoint: config.chat_endpoint.clone() }
    }
}

#[async_trait(?Send)]
impl ChatService for HttpChatService {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = post_json(&self.endpoint, request).await?;
            check_chat_status(resp.ok(), resp.status())?;
            resp.json::<ChatReply>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ServiceError::Unavailable { endpoint: self.endpoint.clone() })
        }
    }
}

/// `AuthService` backed by `POST /login` and `POST /register`.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    login_endpoint: String,
    register_endpoint: String,
}

impl HttpAuthService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            login_endpoint: config.login_endpoint.clone(),
            register_endpoint: config.register_endpoint.clone(),
        }
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn login(&self, request: &LoginRequest) -> Result<AuthReply, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            post_auth(&self.login_endpoint, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ServiceError::Unavailable { endpoint: self.login_endpoint.clone() })
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn register(&self, request: &RegisterRequest) -> Result<AuthReply, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            post_auth(&self.register_endpoint, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ServiceError::Unavailable { endpoint: self.register_endpoint.clone() })
        }
    }
}
