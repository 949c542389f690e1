use super::*;
use crate::net::api::interpret_login_response;

// =============================================================
// Defaults
// =============================================================

#[test]
fn form_state_default_is_empty() {
    let form = FormState::default();
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
}

#[test]
fn auth_state_default_shows_nothing() {
    let state = AuthState::default();
    assert!(!state.shows_error());
    assert!(!state.shows_token());
}

// =============================================================
// FormState editing
// =============================================================

#[test]
fn set_email_leaves_password_untouched() {
    let mut form = FormState { email: String::new(), password: "secret".to_owned() };
    form.set_email("a@b.com".to_owned());
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "secret");
}

#[test]
fn set_password_leaves_email_untouched() {
    let mut form = FormState { email: "a@b.com".to_owned(), password: String::new() };
    form.set_password("pw".to_owned());
    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "pw");
}

#[test]
fn to_request_copies_values_verbatim() {
    let form = FormState { email: " a@b.com".to_owned(), password: "pw ".to_owned() };
    let req = form.to_request();
    assert_eq!(req.email, " a@b.com");
    assert_eq!(req.password, "pw ");
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn success_sets_token_and_clears_error() {
    let mut state = AuthState { token: String::new(), error: "Login failed: D".to_owned() };
    state.apply(interpret_login_response(true, r#"{"access_token":"T"}"#));
    assert_eq!(state.token, "T");
    assert!(!state.shows_error());
    assert!(state.shows_token());
    assert_eq!(state.token_preview(), "T...");
}

#[test]
fn failure_with_detail_sets_exact_message() {
    let mut state = AuthState::default();
    state.apply(interpret_login_response(false, r#"{"detail":"D"}"#));
    assert_eq!(state.error, "Login failed: D");
    assert!(!state.shows_token());
}

#[test]
fn failure_without_body_sets_unknown_error() {
    let mut state = AuthState::default();
    state.apply(interpret_login_response(false, ""));
    assert_eq!(state.error, "Login failed: Unknown error");
}

#[test]
fn failure_after_success_keeps_stale_token() {
    let mut state = AuthState::default();
    state.apply(Ok("first-token".to_owned()));
    state.apply(Err(LoginFailure::with_detail("Invalid credentials")));
    assert_eq!(state.token, "first-token");
    assert_eq!(state.error, "Login failed: Invalid credentials");
    assert!(state.shows_token());
    assert!(state.shows_error());
}

#[test]
fn last_applied_outcome_wins() {
    let mut state = AuthState::default();
    state.apply(Err(LoginFailure::unknown()));
    state.apply(Ok("late".to_owned()));
    assert_eq!(state.token, "late");
    assert!(!state.shows_error());
}

// =============================================================
// token_preview
// =============================================================

#[test]
fn token_preview_short_token_still_gets_ellipsis() {
    assert_eq!(token_preview("abc"), "abc...");
}

#[test]
fn token_preview_exactly_fifty_chars() {
    let token = "x".repeat(50);
    assert_eq!(token_preview(&token), format!("{token}..."));
}

#[test]
fn token_preview_truncates_long_token() {
    let token = format!("{}{}", "a".repeat(50), "b".repeat(30));
    let preview = token_preview(&token);
    assert_eq!(preview, format!("{}...", "a".repeat(50)));
    assert_eq!(preview.chars().count(), TOKEN_PREVIEW_CHARS + 3);
}

#[test]
fn token_preview_counts_characters_not_bytes() {
    let token = "é".repeat(60);
    assert_eq!(token_preview(&token), format!("{}...", "é".repeat(50)));
}
