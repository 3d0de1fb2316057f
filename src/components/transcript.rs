//! Message list with the typing indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bot replies are rendered as sanitized markdown through `inner_html`;
//! user text always goes through a text node so it is escaped. Messages are
//! keyed by id, so an append renders only the new message.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, Sender};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn Transcript() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.with(|c| (c.messages.len(), c.pending));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            {move || {
                chat.with(|c| c.messages.is_empty())
                    .then(|| {
                        view! {
                            <div class="chat-messages__empty">
                                "This is your safe space. Share whatever is on your mind."
                            </div>
                        }
                    })
            }}

            <For
                each=move || chat.with(|c| c.messages.clone())
                key=|msg| msg.id
                children=move |msg: ChatMessage| {
                    let body = match msg.sender {
                        Sender::Bot => {
                            let rendered = render_markdown_html(&msg.text);
                            view! { <div class="message-text message-text--markdown" inner_html=rendered></div> }
                                .into_any()
                        }
                        Sender::User => view! { <div class="message-text">{msg.text}</div> }.into_any(),
                    };
                    view! {
                        <div class=format!("message {}", msg.sender.css_class()) data-message-id=msg.id.to_string()>
                            <div class="message-content">
                                {body}
                                <div class="message-time">{msg.time_label}</div>
                            </div>
                        </div>
                    }
                }
            />

            {move || {
                chat.with(ChatState::is_typing)
                    .then(|| {
                        view! {
                            <div class="typing-indicator">
                                <div class="typing-dots">
                                    <div class="typing-dot"></div>
                                    <div class="typing-dot"></div>
                                    <div class="typing-dot"></div>
                                </div>
                                <div class="typing-text">"MindBloom is thinking..."</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
