//! Client configuration: endpoint paths, timeouts and redirect delays.
//!
//! Defaults match the routes served by the MindBloom backend. A deployment
//! may override any subset through a JSON document embedded in the page as
//! `<meta name="mindbloom-config" content="{...}">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::auth::FormKind;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_LOGIN_ENDPOINT: &str = "/login";
pub const DEFAULT_REGISTER_ENDPOINT: &str = "/register";
pub const DEFAULT_HOME_ROUTE: &str = "/";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_LOGIN_REDIRECT_DELAY_MS: u32 = 1_500;
pub const DEFAULT_REGISTER_REDIRECT_DELAY_MS: u32 = 2_000;

#[cfg(feature = "hydrate")]
const CONFIG_META_SELECTOR: &str = "meta[name=\"mindbloom-config\"]";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The override document is not valid JSON for `ClientConfig`.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A value parsed but cannot be used.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub chat_endpoint: String,
    pub login_endpoint: String,
    pub register_endpoint: String,
    pub home_route: String,
    /// Upper bound on any single request before it counts as a transport failure.
    pub request_timeout_ms: u32,
    pub login_redirect_delay_ms: u32,
    pub register_redirect_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            register_endpoint: DEFAULT_REGISTER_ENDPOINT.to_owned(),
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            login_redirect_delay_ms: DEFAULT_LOGIN_REDIRECT_DELAY_MS,
            register_redirect_delay_ms: DEFAULT_REGISTER_REDIRECT_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// Parse a partial JSON override; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for empty endpoints or a zero timeout.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read the override from the page `<meta>` tag, falling back to defaults.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(raw) = read_meta_override() else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(err) => {
                    leptos::logging::warn!("ignoring mindbloom-config override: {err}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Delay between a successful submit and the redirect home.
    pub fn redirect_delay_ms(&self, kind: FormKind) -> u32 {
        match kind {
            FormKind::Login => self.login_redirect_delay_ms,
            FormKind::Register => self.register_redirect_delay_ms,
        }
    }

    pub fn auth_endpoint(&self, kind: FormKind) -> &str {
        match kind {
            FormKind::Login => &self.login_endpoint,
            FormKind::Register => &self.register_endpoint,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let endpoints = [
            ("chat_endpoint", &self.chat_endpoint),
            ("login_endpoint", &self.login_endpoint),
            ("register_endpoint", &self.register_endpoint),
            ("home_route", &self.home_route),
        ];
        for (field, value) in endpoints {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid { field, reason: "must not be empty".to_owned() });
            }
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_ms",
                reason: "must be greater than zero".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn read_meta_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    match document.query_selector(CONFIG_META_SELECTOR) {
        Ok(meta) => meta?.get_attribute("content"),
        Err(err) => {
            leptos::logging::warn!("config meta lookup failed: {err:?}");
            None
        }
    }
}
