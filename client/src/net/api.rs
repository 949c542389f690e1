//! REST helper for the authentication endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning a failure since the login call is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure cause (transport, non-2xx status, undecodable body) collapses
//! into a single `LoginFailure` whose display text is shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::LoginRequest;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ErrorBody, LoginResponse};

/// Fixed authentication endpoint.
pub const LOGIN_ENDPOINT: &str = "http://localhost:8000/login";

const UNKNOWN_ERROR: &str = "Unknown error";

/// A failed login attempt, carrying the server's `detail` when it sent one.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("Login failed: {}", detail_or_unknown(.detail))]
pub struct LoginFailure {
    pub detail: Option<String>,
}

impl LoginFailure {
    /// Failure with no usable server detail.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Failure with server detail; an empty detail counts as absent.
    pub fn with_detail(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self { detail: (!detail.is_empty()).then_some(detail) }
    }
}

fn detail_or_unknown(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or(UNKNOWN_ERROR)
}

/// Map a response status class and raw body to a token or a failure.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn interpret_login_response(ok: bool, body: &str) -> Result<String, LoginFailure> {
    if ok {
        return serde_json::from_str::<LoginResponse>(body)
            .map(|resp| resp.access_token)
            .map_err(|_| LoginFailure::unknown());
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|err| err.detail_text());
    Err(LoginFailure { detail })
}

#[cfg(feature = "hydrate")]
fn transport_failure(err: &gloo_net::Error) -> LoginFailure {
    leptos::logging::warn!("login request error: {err}");
    LoginFailure::unknown()
}

/// Submit credentials via `POST` to [`LOGIN_ENDPOINT`] and return the access token.
///
/// # Errors
///
/// Returns a `LoginFailure` if the request cannot be sent, the server responds
/// with a non-2xx status, or the success body has no `access_token`.
pub async fn login(request: &LoginRequest) -> Result<String, LoginFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(request)
            .map_err(|e| transport_failure(&e))?
            .send()
            .await
            .map_err(|e| transport_failure(&e))?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| transport_failure(&e))?;
        interpret_login_response(ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(LoginFailure::unknown())
    }
}
