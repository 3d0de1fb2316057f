//! Form-level success or error message.

use leptos::prelude::*;

use crate::state::auth::{BannerKind, FormState};

/// Renders the current banner, if any. The form controller removes a
/// success banner on a timer; error banners stay until replaced.
#[component]
pub fn AuthBanner() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    move || {
        form.with(|f| f.banner.clone()).map(|banner| {
            match banner.kind {
                BannerKind::Success => view! {
                    <div class="auth-message auth-message-success" role="status">
                        {banner.text}
                    </div>
                }
                    .into_any(),
                BannerKind::Error => view! {
                    <div class="auth-message auth-message-error" role="alert">
                        {banner.text}
                    </div>
                }
                    .into_any(),
            }
        })
    }
}
