//! Sign-in page.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::auth::FormKind;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Welcome back"</h1>
                <p class="auth-subtitle">"Your safe space is waiting for you."</p>
                <AuthForm kind=FormKind::Login/>
                <p class="auth-switch">
                    "New to MindBloom? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
