use super::*;

// =============================================================
// FormState defaults
// =============================================================

#[test]
fn new_form_is_idle_and_neutral() {
    let state = FormState::new(FormKind::Login);
    assert!(!state.is_pending());
    assert!(state.outcomes.is_empty());
    assert!(state.banner.is_none());
    assert!(!state.shake);
    assert!(state.particles.is_empty());
    assert_eq!(state.submit_label, "Sign In");
}

#[test]
fn register_form_uses_register_label() {
    assert_eq!(FormState::new(FormKind::Register).submit_label, "Create Account");
}

#[test]
fn form_kind_fields_in_display_order() {
    assert_eq!(FormKind::Login.fields(), &[Field::Username, Field::Password]);
    assert_eq!(FormKind::Register.fields(), &[Field::Username, Field::Email, Field::Password]);
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn set_outcome_supersedes_previous_outcome() {
    let mut state = FormState::new(FormKind::Register);
    state.set_outcome(ValidationOutcome::error(Field::Username, "too short"));
    state.set_outcome(ValidationOutcome::ok(Field::Username));
    assert_eq!(state.outcomes.len(), 1);
    assert_eq!(state.outcome(Field::Username), Some(&ValidationOutcome::ok(Field::Username)));
}

#[test]
fn clear_outcome_returns_field_to_neutral() {
    let mut state = FormState::new(FormKind::Register);
    state.set_outcome(ValidationOutcome::warning(Field::Password, "weak"));
    state.clear_outcome(Field::Password);
    assert!(state.outcome(Field::Password).is_none());
    assert_eq!(state.input_class(Field::Password), "");
}

#[test]
fn input_class_tracks_status() {
    let mut state = FormState::new(FormKind::Register);
    state.set_outcome(ValidationOutcome::ok(Field::Username));
    state.set_outcome(ValidationOutcome::error(Field::Email, "bad"));
    state.set_outcome(ValidationOutcome::warning(Field::Password, "weak"));
    assert_eq!(state.input_class(Field::Username), "input-success");
    assert_eq!(state.input_class(Field::Email), "input-error");
    assert_eq!(state.input_class(Field::Password), "input-warning");
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn begin_submission_swaps_label_and_remembers_original() {
    let mut state = FormState::new(FormKind::Login);
    state.begin_submission("Signing you in...");
    assert!(state.is_pending());
    assert_eq!(state.submit_label, "Signing you in...");
    assert_eq!(state.submission.as_ref().map(|s| s.original_label.as_str()), Some("Sign In"));
}

#[test]
fn finish_submission_restores_original_label() {
    let mut state = FormState::new(FormKind::Register);
    state.begin_submission("Creating your account...");
    state.finish_submission();
    assert!(!state.is_pending());
    assert!(state.submission.is_none());
    assert_eq!(state.submit_label, "Create Account");
}

#[test]
fn finish_submission_without_begin_is_noop() {
    let mut state = FormState::new(FormKind::Login);
    state.finish_submission();
    assert_eq!(state.submit_label, "Sign In");
}

// =============================================================
// Banner
// =============================================================

#[test]
fn show_banner_replaces_existing_banner() {
    let mut state = FormState::new(FormKind::Login);
    let first = state.show_banner(BannerKind::Error, "one");
    let second = state.show_banner(BannerKind::Error, "two");
    assert_ne!(first, second);
    let banner = state.banner.as_ref().unwrap();
    assert_eq!(banner.id, second);
    assert_eq!(banner.text, "two");
}

#[test]
fn dismiss_banner_ignores_stale_id() {
    let mut state = FormState::new(FormKind::Login);
    let stale = state.show_banner(BannerKind::Success, "old");
    let current = state.show_banner(BannerKind::Error, "new");
    state.dismiss_banner(stale);
    assert_eq!(state.banner.as_ref().map(|b| b.id), Some(current));
    state.dismiss_banner(current);
    assert!(state.banner.is_none());
}

// =============================================================
// Celebration
// =============================================================

#[test]
fn celebration_is_bounded_and_staggered() {
    let mut state = FormState::new(FormKind::Register);
    state.start_celebration(&[0, 255, 1, 0, 2, 128, 3, 64, 4, 32, 5, 16]);
    assert_eq!(state.particles.len(), CELEBRATION_PARTICLES);
    let delays: Vec<u32> = state.particles.iter().map(|p| p.delay_ms).collect();
    assert_eq!(delays, vec![0, 200, 400, 600, 800, 1000]);
    assert_eq!(state.particles[0].glyph, "🌸");
    assert_eq!(state.particles[1].glyph, "✨");
    assert!((state.particles[0].left_vw - 100.0).abs() < f32::EPSILON);
    assert!(state.particles.iter().all(|p| (0.0..=100.0).contains(&p.left_vw)));
}

#[test]
fn celebration_tolerates_short_entropy() {
    let mut state = FormState::new(FormKind::Register);
    state.start_celebration(&[]);
    assert_eq!(state.particles.len(), CELEBRATION_PARTICLES);
    assert!(state.particles.iter().all(|p| p.glyph == CELEBRATION_GLYPHS[0]));
}

#[test]
fn remove_particle_drops_only_that_particle() {
    let mut state = FormState::new(FormKind::Register);
    state.start_celebration(&[0; 12]);
    let first = state.particles[0].id;
    state.remove_particle(first);
    assert_eq!(state.particles.len(), CELEBRATION_PARTICLES - 1);
    assert!(state.particles.iter().all(|p| p.id != first));
}

// =============================================================
// Shake
// =============================================================

#[test]
fn stale_shake_token_does_not_end_a_newer_shake() {
    let mut state = FormState::new(FormKind::Login);
    let first = state.start_shake();
    let second = state.start_shake();

    state.end_shake(first);
    assert!(state.shake);
    state.end_shake(second);
    assert!(!state.shake);
}
