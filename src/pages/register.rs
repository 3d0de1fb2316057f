//! Account creation page.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::state::auth::FormKind;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-title">"Join MindBloom"</h1>
                <p class="auth-subtitle">"A calm, private place to check in with yourself."</p>
                <AuthForm kind=FormKind::Register/>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
