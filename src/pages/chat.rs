//! Support chat page: mood check-in, transcript and composer.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::crisis_panel::CrisisPanel;
use crate::components::mood_selector::MoodSelector;
use crate::components::transcript::Transcript;
use crate::config::ClientConfig;
use crate::controller::chat::ChatController;
use crate::net::api::HttpChatService;
use crate::state::chat::{ChatState, Mood};
use crate::util::timer::BrowserClock;

pub type BrowserChatController = ChatController<HttpChatService, BrowserClock>;

#[component]
pub fn ChatPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);
    let draft = RwSignal::new(String::new());

    let controller: BrowserChatController = ChatController::new(
        chat,
        draft,
        Rc::new(HttpChatService::new(&config)),
        Rc::new(BrowserClock),
        config.request_timeout_ms,
    );
    let ctl = StoredValue::new_local(controller);
    let crisis_open = RwSignal::new(false);

    let on_draft = Callback::new(move |text: String| ctl.with_value(|c| c.set_draft(text)));
    let on_send = Callback::new(move |()| {
        let controller = ctl.get_value();
        leptos::task::spawn_local(async move {
            controller.send_draft().await;
        });
    });
    let on_quick_reply = Callback::new(move |text: String| {
        let controller = ctl.get_value();
        leptos::task::spawn_local(async move {
            controller.send_quick_reply(&text).await;
        });
    });
    let on_mood = Callback::new(move |mood: Mood| {
        let controller = ctl.get_value();
        leptos::task::spawn_local(async move {
            controller.select_mood(mood).await;
        });
    });

    view! {
        <div class="app-container">
            <aside class="sidebar">
                <div class="brand">
                    <span class="brand__logo">"🌸"</span>
                    <span class="brand__name">"MindBloom"</span>
                </div>
                <div class="sidebar-footer">
                    <button type="button" class="checkin-btn" on:click=move |_| ctl.with_value(|c| c.start_new_checkin())>
                        <span class="checkin-icon">"✨"</span>
                        <span class="checkin-text">"New Check-in"</span>
                    </button>
                </div>
            </aside>

            <main class="chat-area">
                <header class="chat-header">
                    <div class="bot-details">
                        <h2 class="bot-name">"MindBloom"</h2>
                        <div class="bot-status">
                            <div class="status-indicator online"></div>
                            <span class="status-text">"Online"</span>
                        </div>
                    </div>
                    <div class="chat-actions">
                        <button
                            type="button"
                            class="action-btn crisis-btn"
                            title="Crisis Support"
                            on:click=move |_| crisis_open.update(|open| *open = !*open)
                        >
                            "🆘"
                        </button>
                    </div>
                </header>

                <MoodSelector on_select=on_mood/>
                <Transcript/>
                <Composer draft=draft on_draft=on_draft on_send=on_send on_quick_reply=on_quick_reply/>
            </main>

            <CrisisPanel open=crisis_open/>
        </div>
    }
}
