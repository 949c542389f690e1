//! Login form state: the editable credentials and the last auth outcome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by a single `LoginForm` instance and dropped with it. Nothing here is
//! persisted or shared through context.
//!
//! TRADE-OFFS
//! ==========
//! `token` and `error` are independent. A failure after an earlier success
//! leaves the old token in place, so both blocks can be visible at once.
//! Responses from overlapping submits are applied in completion order.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::LoginFailure;
use crate::net::types::LoginRequest;

/// Number of token characters shown before the ellipsis.
pub const TOKEN_PREVIEW_CHARS: usize = 50;

/// Two-way bound input values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
}

impl FormState {
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    /// Snapshot the current values as a request body, verbatim.
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

/// Result of the most recent login attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: String,
    pub error: String,
}

impl AuthState {
    /// Apply one login outcome.
    ///
    /// Success stores the token and clears the error. Failure stores the
    /// user-facing message and keeps whatever token was there.
    pub fn apply(&mut self, outcome: Result<String, LoginFailure>) {
        match outcome {
            Ok(token) => {
                self.token = token;
                self.error.clear();
            }
            Err(failure) => self.error = failure.to_string(),
        }
    }

    pub fn shows_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn shows_token(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn token_preview(&self) -> String {
        token_preview(&self.token)
    }
}

/// First [`TOKEN_PREVIEW_CHARS`] characters of `token` followed by `...`.
///
/// The ellipsis is always appended, even for short tokens.
pub fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(TOKEN_PREVIEW_CHARS).collect();
    format!("{head}...")
}
