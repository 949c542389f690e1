//! Login page: heading plus the email/password form.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Task Manager Login"</h1>
            <LoginForm/>
        </div>
    }
}
