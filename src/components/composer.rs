//! Message composer and quick replies.

use leptos::prelude::*;

use crate::state::chat::{QUICK_REPLIES, can_send};

/// Textarea plus send button. Enter sends; Shift+Enter inserts a newline.
#[component]
pub fn Composer(
    draft: RwSignal<String>,
    on_draft: Callback<String>,
    on_send: Callback<()>,
    on_quick_reply: Callback<String>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="chat-input">
            <div class="quick-replies">
                {QUICK_REPLIES
                    .into_iter()
                    .map(|text| {
                        view! {
                            <button type="button" class="quick-reply-btn" on:click=move |_| on_quick_reply.run(text.to_owned())>
                                {text}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="input-container">
                <textarea
                    class="message-input"
                    placeholder="Type your message..."
                    rows="1"
                    prop:value=move || draft.get()
                    on:input=move |ev| on_draft.run(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    type="button"
                    class="send-btn"
                    title="Send Message"
                    disabled=move || !draft.with(|d| can_send(d))
                    on:click=move |_| on_send.run(())
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
