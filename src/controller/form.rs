//! Live validation and the submit pipeline for the login and registration
//! forms.
//!
//! SUBMIT PIPELINE
//! ===============
//! validate -> disable the control -> one auth request (raced against the
//! configured timeout) -> banner -> restore the control -> redirect home on
//! success. Every failure is terminal for that attempt and shown inline;
//! nothing is retried.
//!
//! The shake, the success banner and the celebration particles all end on
//! timers scheduled through the injected [`Clock`], so they are bounded
//! whether or not the page has animations.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::service::{AuthService, ServiceError};
use crate::net::types::{AuthReply, LoginRequest, RegisterRequest};
use crate::state::auth::{
    BannerKind, CONNECTIVITY_ERROR, Field, FormKind, FormState, PARTICLE_LIFETIME_MS, SHAKE_MS, SUCCESS_BANNER_MS,
    ValidationOutcome,
};
use crate::util::navigation::Navigator;
use crate::util::timer::{Clock, with_timeout};
use crate::util::validation::{live_outcome, validate_submission};

/// Why a submit attempt ended without a redirect.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Client-side rules failed; no request was made.
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<ValidationOutcome>),

    /// The server answered `success: false`.
    #[error("rejected by server: {0}")]
    Application(String),

    #[error(transparent)]
    Transport(#[from] ServiceError),

    /// Another submit is still in flight.
    #[error("a submission is already pending")]
    AlreadyPending,
}

/// Raw values of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Raw values of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// DOM events a form field forwards to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    Input(String),
    Focus,
    Blur(String),
}

enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthRequest {
    fn kind(&self) -> FormKind {
        match self {
            Self::Login(_) => FormKind::Login,
            Self::Register(_) => FormKind::Register,
        }
    }
}

/// Holds the submit control disabled; restores it when dropped, including
/// when the submit future itself is dropped mid-request.
struct SubmissionGuard {
    state: RwSignal<FormState>,
}

impl SubmissionGuard {
    fn begin(state: RwSignal<FormState>, loading_label: &str) -> Self {
        state.try_update(|s| s.begin_submission(loading_label));
        Self { state }
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.state.try_update(FormState::finish_submission);
    }
}

pub struct FormValidationController<A, C, N> {
    state: RwSignal<FormState>,
    service: Rc<A>,
    clock: Rc<C>,
    navigator: Rc<N>,
    config: ClientConfig,
}

impl<A, C, N> Clone for FormValidationController<A, C, N> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            service: Rc::clone(&self.service),
            clock: Rc::clone(&self.clock),
            navigator: Rc::clone(&self.navigator),
            config: self.config.clone(),
        }
    }
}

impl<A: AuthService, C: Clock, N: Navigator> FormValidationController<A, C, N> {
    pub fn new(
        state: RwSignal<FormState>,
        service: Rc<A>,
        clock: Rc<C>,
        navigator: Rc<N>,
        config: ClientConfig,
    ) -> Self {
        Self { state, service, clock, navigator, config }
    }

    pub fn state(&self) -> RwSignal<FormState> {
        self.state
    }

    /// Re-validate one field as the user types. An empty value leaves the
    /// field neutral (`None`).
    pub fn validate_input(&self, field: Field, raw: &str) -> Option<ValidationOutcome> {
        let outcome = live_outcome(field, raw);
        self.state.try_update(|s| match &outcome {
            Some(outcome) => s.set_outcome(outcome.clone()),
            None => s.clear_outcome(field),
        });
        outcome
    }

    /// Focus drops any previous verdict so the user starts from neutral.
    pub fn focus(&self, field: Field) {
        self.state.try_update(|s| {
            s.focused = Some(field);
            s.clear_outcome(field);
        });
    }

    pub fn blur(&self, field: Field, raw: &str) -> Option<ValidationOutcome> {
        self.state.try_update(|s| {
            if s.focused == Some(field) {
                s.focused = None;
            }
        });
        self.validate_input(field, raw)
    }

    pub fn handle_field_event(&self, field: Field, event: FieldEvent) {
        match event {
            FieldEvent::Input(value) => {
                self.validate_input(field, &value);
            }
            FieldEvent::Focus => self.focus(field),
            FieldEvent::Blur(value) => {
                self.blur(field, &value);
            }
        }
    }

    /// Submit the login form.
    ///
    /// # Errors
    ///
    /// Any [`SubmitError`]; each one has already been rendered into the form
    /// state by the time it is returned.
    pub async fn handle_login(&self, input: &LoginInput) -> Result<(), SubmitError> {
        let username = input.username.trim();
        let values = [(Field::Username, username), (Field::Password, input.password.as_str())];
        let request = LoginRequest { username: username.to_owned(), password: input.password.clone() };
        self.submit(&values, AuthRequest::Login(request)).await
    }

    /// Submit the registration form.
    ///
    /// # Errors
    ///
    /// Any [`SubmitError`]; see [`Self::handle_login`].
    pub async fn handle_register(&self, input: &RegisterInput) -> Result<(), SubmitError> {
        let username = input.username.trim();
        let email = input.email.trim();
        let values = [(Field::Username, username), (Field::Email, email), (Field::Password, input.password.as_str())];
        let request = RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: input.password.clone(),
        };
        self.submit(&values, AuthRequest::Register(request)).await
    }

    /// Shake the form for [`SHAKE_MS`]. A shake started while another is
    /// running restarts the timer.
    fn shake(&self) {
        let Some(token) = self.state.try_update(FormState::start_shake) else {
            return;
        };
        let state = self.state;
        self.clock.schedule(
            SHAKE_MS,
            Box::new(move || {
                state.try_update(|s| s.end_shake(token));
            }),
        );
    }

    fn expire_banner(&self, id: u64, after_ms: u32) {
        let state = self.state;
        self.clock.schedule(
            after_ms,
            Box::new(move || {
                state.try_update(|s| s.dismiss_banner(id));
            }),
        );
    }

    fn expire_particle(&self, id: u64, delay_ms: u32) {
        let state = self.state;
        self.clock.schedule(
            delay_ms + PARTICLE_LIFETIME_MS,
            Box::new(move || {
                state.try_update(|s| s.remove_particle(id));
            }),
        );
    }

    async fn submit(&self, values: &[(Field, &str)], request: AuthRequest) -> Result<(), SubmitError> {
        let kind = request.kind();
        if self.state.try_with_untracked(FormState::is_pending).unwrap_or(true) {
            return Err(SubmitError::AlreadyPending);
        }

        let errors = validate_submission(kind, values);
        if !errors.is_empty() {
            self.state.try_update(|s| {
                for outcome in &errors {
                    s.set_outcome(outcome.clone());
                }
            });
            self.shake();
            return Err(SubmitError::Validation(errors));
        }

        let result = {
            let _guard = SubmissionGuard::begin(self.state, kind.loading_label());
            with_timeout(&*self.clock, self.config.request_timeout_ms, self.send(&request))
                .await
                .unwrap_or_else(|| Err(ServiceError::Timeout { after_ms: self.config.request_timeout_ms }))
        };

        match result {
            Ok(reply) if reply.success => {
                let shown = self.state.try_update(|s| {
                    let banner_id = s.show_banner(BannerKind::Success, kind.success_message());
                    let first_new = s.particles.len();
                    if kind == FormKind::Register {
                        s.start_celebration(uuid::Uuid::new_v4().as_bytes());
                    }
                    let particles: Vec<(u64, u32)> =
                        s.particles.iter().skip(first_new).map(|p| (p.id, p.delay_ms)).collect();
                    (banner_id, particles)
                });
                if let Some((banner_id, particles)) = shown {
                    self.expire_banner(banner_id, SUCCESS_BANNER_MS);
                    for (id, delay_ms) in particles {
                        self.expire_particle(id, delay_ms);
                    }
                }
                let delay_ms = self.config.redirect_delay_ms(kind);
                leptos::logging::log!("{kind:?} accepted; redirecting to {} in {delay_ms} ms", self.config.home_route);
                self.clock.sleep(delay_ms).await;
                self.navigator.navigate(&self.config.home_route);
                Ok(())
            }
            Ok(reply) => {
                let text = reply.message_or(kind.rejection_fallback()).to_owned();
                leptos::logging::warn!("{kind:?} rejected: {text}");
                self.state.try_update(|s| {
                    s.show_banner(BannerKind::Error, text.clone());
                });
                self.shake();
                Err(SubmitError::Application(text))
            }
            Err(err) => {
                leptos::logging::warn!("{kind:?} request to {} failed: {err}", self.config.auth_endpoint(kind));
                self.state.try_update(|s| {
                    s.show_banner(BannerKind::Error, CONNECTIVITY_ERROR);
                });
                Err(SubmitError::Transport(err))
            }
        }
    }

    async fn send(&self, request: &AuthRequest) -> Result<AuthReply, ServiceError> {
        match request {
            AuthRequest::Login(body) => self.service.login(body).await,
            AuthRequest::Register(body) => self.service.register(body).await,
        }
    }
}
