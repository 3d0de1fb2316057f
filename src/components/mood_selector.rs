//! Row of mood buttons above the transcript.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Mood};

/// One button per [`Mood`]; the active mood is highlighted.
#[component]
pub fn MoodSelector(on_select: Callback<Mood>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="mood-selector">
            <span class="mood-selector__prompt">"How are you feeling?"</span>
            {Mood::ALL
                .into_iter()
                .map(|mood| {
                    view! {
                        <button
                            type="button"
                            class=format!("mood-btn {}", mood.css_class())
                            class:active=move || chat.with(|c| c.mood == Some(mood))
                            on:click=move |_| on_select.run(mood)
                        >
                            {mood.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
