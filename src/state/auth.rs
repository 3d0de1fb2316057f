//! Observable state of one login or registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FormValidationController` is the only writer. Components derive input
//! decorations, the banner, the submit button and the decorative effects
//! from this state and never keep their own copy of it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::BTreeMap;

/// Glyphs floated up the page after a successful registration.
pub const CELEBRATION_GLYPHS: [&str; 4] = ["🌸", "✨", "💚", "🌱"];
/// Number of particles in one celebration burst.
pub const CELEBRATION_PARTICLES: usize = 6;
/// Delay between consecutive particles of a burst.
pub const CELEBRATION_STAGGER_MS: u32 = 200;
/// How long one particle floats before it is removed.
pub const PARTICLE_LIFETIME_MS: u32 = 3_000;
/// Length of the rejection shake.
pub const SHAKE_MS: u32 = 500;
/// How long a success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 4_000;

/// Which form this state belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Resting label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }

    /// Label shown while the request is in flight.
    pub fn loading_label(self) -> &'static str {
        match self {
            Self::Login => "Signing you in...",
            Self::Register => "Creating your account...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Login => "Welcome back! Redirecting to your safe space...",
            Self::Register => "Welcome to MindBloom! Your safe space is ready...",
        }
    }

    /// Shown when the server reports failure without a message of its own.
    pub fn rejection_fallback(self) -> &'static str {
        match self {
            Self::Login => "We couldn't sign you in. Please check your credentials.",
            Self::Register => "We couldn't create your account. Please try again.",
        }
    }

    /// Fields rendered by this form, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Login => &[Field::Username, Field::Password],
            Self::Register => &[Field::Username, Field::Email, Field::Password],
        }
    }
}

/// Shown for any transport failure on either form.
pub const CONNECTIVITY_ERROR: &str = "We're having trouble connecting right now. Please try again in a moment.";

/// A validated form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// The input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeStatus {
    Ok,
    Error,
    Warning,
}

/// Result of validating one field; replaced wholesale on every pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub field: Field,
    pub status: OutcomeStatus,
    /// Empty for `Ok`.
    pub message: String,
}

impl ValidationOutcome {
    pub fn ok(field: Field) -> Self {
        Self { field, status: OutcomeStatus::Ok, message: String::new() }
    }

    pub fn error(field: Field, message: impl Into<String>) -> Self {
        Self { field, status: OutcomeStatus::Error, message: message.into() }
    }

    pub fn warning(field: Field, message: impl Into<String>) -> Self {
        Self { field, status: OutcomeStatus::Warning, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.status == OutcomeStatus::Error
    }
}

/// Lives only while a submit request is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionState {
    pub pending: bool,
    pub original_label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Form-level feedback shown above the fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub text: String,
}

/// One floating glyph of the registration celebration.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub glyph: &'static str,
    /// Horizontal start position in viewport-width percent.
    pub left_vw: f32,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct FormState {
    pub kind: FormKind,
    pub outcomes: BTreeMap<Field, ValidationOutcome>,
    pub focused: Option<Field>,
    pub submit_label: String,
    pub submission: Option<SubmissionState>,
    pub banner: Option<Banner>,
    /// Set when the form is rejected; cleared [`SHAKE_MS`] later.
    pub shake: bool,
    pub particles: Vec<Particle>,
    shake_token: u64,
    next_id: u64,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            outcomes: BTreeMap::new(),
            focused: None,
            submit_label: kind.submit_label().to_owned(),
            submission: None,
            banner: None,
            shake: false,
            particles: Vec::new(),
            shake_token: 0,
            next_id: 0,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.submission.as_ref().is_some_and(|s| s.pending)
    }

    pub fn outcome(&self, field: Field) -> Option<&ValidationOutcome> {
        self.outcomes.get(&field)
    }

    /// Replace whatever outcome the field had.
    pub fn set_outcome(&mut self, outcome: ValidationOutcome) {
        self.outcomes.insert(outcome.field, outcome);
    }

    pub fn clear_outcome(&mut self, field: Field) {
        self.outcomes.remove(&field);
    }

    /// CSS class for the field's input, empty when neutral.
    pub fn input_class(&self, field: Field) -> &'static str {
        match self.outcome(field).map(|o| o.status) {
            Some(OutcomeStatus::Ok) => "input-success",
            Some(OutcomeStatus::Error) => "input-error",
            Some(OutcomeStatus::Warning) => "input-warning",
            None => "",
        }
    }

    /// Disable the submit control and swap in the loading label.
    pub fn begin_submission(&mut self, loading_label: &str) {
        let original_label = std::mem::replace(&mut self.submit_label, loading_label.to_owned());
        self.submission = Some(SubmissionState { pending: true, original_label });
    }

    /// Re-enable the submit control with its original label.
    pub fn finish_submission(&mut self) {
        if let Some(submission) = self.submission.take() {
            self.submit_label = submission.original_label;
        }
    }

    /// Show `text`, replacing any banner already on screen. Returns the banner id.
    pub fn show_banner(&mut self, kind: BannerKind, text: impl Into<String>) -> u64 {
        let id = self.allocate_id();
        self.banner = Some(Banner { id, kind, text: text.into() });
        id
    }

    /// Remove the banner if it is still the one identified by `id`.
    pub fn dismiss_banner(&mut self, id: u64) {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }

    /// Start (or restart) the shake. Returns the token that ends this shake.
    pub fn start_shake(&mut self) -> u64 {
        self.shake = true;
        self.shake_token = self.allocate_id();
        self.shake_token
    }

    /// Stop the shake unless a newer one has started since `token` was issued.
    pub fn end_shake(&mut self, token: u64) {
        if self.shake_token == token {
            self.shake = false;
        }
    }

    /// Queue a full celebration burst. `entropy` supplies one byte per particle
    /// for glyph choice and one for horizontal position.
    pub fn start_celebration(&mut self, entropy: &[u8]) {
        for i in 0..CELEBRATION_PARTICLES {
            let glyph_byte = entropy.get(i * 2).copied().unwrap_or(0);
            let left_byte = entropy.get(i * 2 + 1).copied().unwrap_or(0);
            let id = self.allocate_id();
            self.particles.push(Particle {
                id,
                glyph: CELEBRATION_GLYPHS[usize::from(glyph_byte) % CELEBRATION_GLYPHS.len()],
                left_vw: f32::from(left_byte) / 255.0 * 100.0,
                delay_ms: u32::try_from(i).unwrap_or(0) * CELEBRATION_STAGGER_MS,
            });
        }
    }

    pub fn remove_particle(&mut self, id: u64) {
        self.particles.retain(|p| p.id != id);
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
