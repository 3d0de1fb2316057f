//! Declarative field rules for the login and registration forms.
//!
//! Each field is checked in a fixed order (required, minimum length,
//! maximum length, pattern, password strength) and the first failing check
//! decides the outcome. Patterns are a UX hint, not a security boundary.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::auth::{Field, FormKind, ValidationOutcome};

static USERNAME_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$"));
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

/// Password strength below which a (non-blocking) warning is shown.
pub const PASSWORD_STRENGTH_MINIMUM: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Username,
    Email,
}

impl Pattern {
    pub fn matches(self, value: &str) -> bool {
        let compiled = match self {
            Self::Username => &*USERNAME_PATTERN,
            Self::Email => &*EMAIL_PATTERN,
        };
        compiled.as_ref().is_ok_and(|re| re.is_match(value))
    }
}

/// Validation rule for one field of one form type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    /// Below this score the field is flagged with a warning, never an error.
    pub strength_minimum: Option<u8>,
}

impl FieldRule {
    const fn required_only(field: Field) -> Self {
        Self { field, required: true, min_length: None, max_length: None, pattern: None, strength_minimum: None }
    }
}

pub const USERNAME_RULE: FieldRule = FieldRule {
    field: Field::Username,
    required: true,
    min_length: Some(3),
    max_length: Some(20),
    pattern: Some(Pattern::Username),
    strength_minimum: None,
};

pub const EMAIL_RULE: FieldRule = FieldRule {
    field: Field::Email,
    required: true,
    min_length: None,
    max_length: None,
    pattern: Some(Pattern::Email),
    strength_minimum: None,
};

pub const PASSWORD_RULE: FieldRule = FieldRule {
    field: Field::Password,
    required: true,
    min_length: Some(8),
    max_length: None,
    pattern: None,
    strength_minimum: Some(PASSWORD_STRENGTH_MINIMUM),
};

const LOGIN_RULES: [FieldRule; 2] = [FieldRule::required_only(Field::Username), FieldRule::required_only(Field::Password)];
const REGISTER_RULES: [FieldRule; 3] = [USERNAME_RULE, EMAIL_RULE, PASSWORD_RULE];

/// Rules checked when the form is submitted.
pub fn submit_rules(kind: FormKind) -> &'static [FieldRule] {
    match kind {
        FormKind::Login => &LOGIN_RULES,
        FormKind::Register => &REGISTER_RULES,
    }
}

/// Rule applied while the user types, identical on every form.
pub fn live_rule(field: Field) -> FieldRule {
    match field {
        Field::Username => USERNAME_RULE,
        Field::Email => EMAIL_RULE,
        Field::Password => PASSWORD_RULE,
    }
}

/// Which check failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Failure {
    Required,
    TooShort,
    TooLong,
    Pattern,
    Weak,
}

/// Result of running a rule against one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Empty,
    Fail(Failure),
    Warn(Failure),
    Pass,
}

/// Run `rule` against an already-trimmed value.
pub fn check(rule: &FieldRule, value: &str) -> Check {
    if value.is_empty() {
        return Check::Empty;
    }
    let len = value.chars().count();
    if rule.min_length.is_some_and(|min| len < min) {
        return Check::Fail(Failure::TooShort);
    }
    if rule.max_length.is_some_and(|max| len > max) {
        return Check::Fail(Failure::TooLong);
    }
    if rule.pattern.is_some_and(|p| !p.matches(value)) {
        return Check::Fail(Failure::Pattern);
    }
    if rule.strength_minimum.is_some_and(|min| password_strength(value) < min) {
        return Check::Warn(Failure::Weak);
    }
    Check::Pass
}

/// Outcome for live validation; `None` means the field is neutral.
pub fn live_outcome(field: Field, raw: &str) -> Option<ValidationOutcome> {
    match check(&live_rule(field), raw.trim()) {
        Check::Empty => None,
        Check::Fail(failure) => Some(ValidationOutcome::error(field, message(field, failure))),
        Check::Warn(failure) => Some(ValidationOutcome::warning(field, message(field, failure))),
        Check::Pass => Some(ValidationOutcome::ok(field)),
    }
}

/// Errors that block submission, in rule order. Fields absent from `values`
/// count as empty; warnings never block.
pub fn validate_submission(kind: FormKind, values: &[(Field, &str)]) -> Vec<ValidationOutcome> {
    submit_rules(kind)
        .iter()
        .filter_map(|rule| {
            let value = values
                .iter()
                .find(|(field, _)| *field == rule.field)
                .map_or("", |(_, value)| *value);
            let failure = match check(rule, value) {
                Check::Empty if rule.required => Failure::Required,
                Check::Fail(failure) => failure,
                Check::Empty | Check::Warn(_) | Check::Pass => return None,
            };
            Some(ValidationOutcome::error(rule.field, message(rule.field, failure)))
        })
        .collect()
}

/// Score 0-4: one point each for length >= 8, an uppercase letter, a digit
/// and a symbol (anything outside `[A-Za-z0-9]`).
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.into_iter().map(u8::from).sum()
}

/// User-facing text for a failed check.
pub fn message(field: Field, failure: Failure) -> &'static str {
    match (field, failure) {
        (Field::Username, Failure::Required) => "Please choose a username that feels right for you",
        (Field::Username, Failure::TooShort) => "Your username should be at least 3 characters",
        (Field::Username, Failure::TooLong) => "Please keep your username under 20 characters",
        (Field::Username, _) => "Usernames can only contain letters, numbers, and underscores",
        (Field::Email, Failure::Required) => "We'll need your email address to keep your account secure",
        (Field::Email, _) => "Please enter a valid email address",
        (Field::Password, Failure::Required) => "Please create a password to protect your private conversations",
        (Field::Password, Failure::Weak) => "Consider adding numbers or symbols to make your password stronger",
        (Field::Password, _) => "For your security, please use at least 8 characters",
    }
}
