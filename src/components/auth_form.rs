//! Login / registration form wired to a browser-backed
//! `FormValidationController`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form state signal is provided as context for `FormField`,
//! `AuthBanner` and `Celebration`. The controller lives in a local
//! `StoredValue` because it holds `Rc` handles.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::auth_banner::AuthBanner;
use crate::components::celebration::Celebration;
use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::controller::form::{FieldEvent, FormValidationController, LoginInput, RegisterInput};
use crate::net::api::HttpAuthService;
use crate::state::auth::{Field, FormKind, FormState};
use crate::util::navigation::BrowserNavigator;
use crate::util::timer::BrowserClock;

pub type BrowserFormController = FormValidationController<HttpAuthService, BrowserClock, BrowserNavigator>;

#[component]
pub fn AuthForm(kind: FormKind) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let state = RwSignal::new(FormState::new(kind));
    provide_context(state);

    let controller: BrowserFormController = FormValidationController::new(
        state,
        Rc::new(HttpAuthService::new(&config)),
        Rc::new(BrowserClock),
        Rc::new(BrowserNavigator),
        config,
    );
    let ctl = StoredValue::new_local(controller);

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let value_of = move |field: Field| match field {
        Field::Username => username,
        Field::Email => email,
        Field::Password => password,
    };

    let on_field = Callback::new(move |(field, event): (Field, FieldEvent)| {
        ctl.with_value(|c| c.handle_field_event(field, event));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = ctl.get_value();
        let username = username.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();

        leptos::task::spawn_local(async move {
            let result = match kind {
                FormKind::Login => controller.handle_login(&LoginInput { username, password }).await,
                FormKind::Register => controller.handle_register(&RegisterInput { username, email, password }).await,
            };
            if let Err(err) = result {
                leptos::logging::log!("{kind:?} submit ended: {err}");
            }
        });
    };

    let pending = move || state.with(FormState::is_pending);

    view! {
        <AuthBanner/>
        <form
            class="auth-form"
            class:form-shake=move || state.with(|s| s.shake)
            novalidate=true
            on:submit=on_submit
        >
            {kind
                .fields()
                .iter()
                .map(|&field| view! { <FormField field=field value=value_of(field) on_event=on_field/> })
                .collect::<Vec<_>>()}
            <button type="submit" class="auth-btn" class:btn-loading=pending disabled=pending>
                {move || state.with(|s| s.submit_label.clone())}
            </button>
        </form>
        <Celebration/>
    }
}
