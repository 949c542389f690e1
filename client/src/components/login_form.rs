//! Email + password login form with token/error feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Self-contained: owns its `FormState` and `AuthState` signals and performs
//! the only network call on the page. Inputs stay editable while a request
//! is in flight and repeated clicks are not coalesced.

use leptos::prelude::*;

use crate::state::auth::{AuthState, FormState};

#[component]
pub fn LoginForm() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let auth = RwSignal::new(AuthState::default());

    let on_login = move |_: leptos::ev::MouseEvent| {
        let request = form.with_untracked(FormState::to_request);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::login(&request).await;
            match &outcome {
                Ok(_) => leptos::logging::log!("login succeeded"),
                Err(e) => leptos::logging::warn!("{e}"),
            }
            auth.update(|s| s.apply(outcome));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (request, auth);
    };

    view! {
        <div class="login-form">
            <input
                class="login-input"
                type="email"
                placeholder="Email address"
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_email(value));
                }
            />
            <input
                class="login-input"
                type="password"
                placeholder="Password"
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_password(value));
                }
            />
            <button class="login-button" type="button" on:click=on_login>
                "Login"
            </button>
        </div>
        <Show when=move || auth.with(AuthState::shows_error)>
            <p class="login-error">{move || auth.with(|s| s.error.clone())}</p>
        </Show>
        <Show when=move || auth.with(AuthState::shows_token)>
            <div class="login-success">
                <p class="login-success__title">"✓ Logged in successfully!"</p>
                <p class="login-success__token">
                    "Token: "
                    {move || auth.with(AuthState::token_preview)}
                </p>
            </div>
        </Show>
    }
}
