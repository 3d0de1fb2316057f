//! Labelled input with its live-validation decoration and message.

use leptos::prelude::*;

use crate::controller::form::FieldEvent;
use crate::state::auth::{Field, FormState, OutcomeStatus};

fn label(field: Field) -> &'static str {
    match field {
        Field::Username => "Username",
        Field::Email => "Email",
        Field::Password => "Password",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Username => "text",
        Field::Email => "email",
        Field::Password => "password",
    }
}

fn message_class(status: OutcomeStatus) -> &'static str {
    match status {
        OutcomeStatus::Ok => "field-message field-message-success",
        OutcomeStatus::Error => "field-message field-message-error",
        OutcomeStatus::Warning => "field-message field-message-warning",
    }
}

/// Forwards input, focus and blur to `on_event`; renders whatever outcome
/// the form state holds for `field`.
#[component]
pub fn FormField(field: Field, value: RwSignal<String>, on_event: Callback<(Field, FieldEvent)>) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let id = format!("field-{}", field.name());

    view! {
        <div class="form-group" class:input-focused=move || form.with(|f| f.focused == Some(field))>
            <label class="form-label" for=id.clone()>
                {label(field)}
            </label>
            <input
                id=id
                name=field.name()
                type=input_type(field)
                class=move || format!("form-input {}", form.with(|f| f.input_class(field)))
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    value.set(text.clone());
                    on_event.run((field, FieldEvent::Input(text)));
                }
                on:focus=move |_| on_event.run((field, FieldEvent::Focus))
                on:blur=move |_| on_event.run((field, FieldEvent::Blur(value.get_untracked())))
            />
            {move || {
                form.with(|f| f.outcome(field).cloned())
                    .filter(|outcome| !outcome.message.is_empty())
                    .map(|outcome| view! { <div class=message_class(outcome.status)>{outcome.message}</div> })
            }}
        </div>
    }
}
