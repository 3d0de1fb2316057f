//! Send pipeline for the support chat.
//!
//! Three entry points (composer, quick reply, mood) share one pipeline:
//! reject blank text, append the user's message at once, request a reply,
//! then append either the reply or [`FALLBACK_REPLY`]. Every accepted
//! message gets exactly one bot message.
//!
//! The composer draft is a separate signal from the transcript state, so a
//! keystroke only wakes the composer.
//!
//! Pipelines are independent. Replies are appended when their own request
//! settles, so concurrent sends may be answered out of send order; each bot
//! message records which user message it answers in `reply_to`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::net::service::{ChatService, ServiceError};
use crate::net::types::ChatRequest;
use crate::state::chat::{ChatState, FALLBACK_REPLY, Mood, Sender};
use crate::util::timer::{Clock, with_timeout};

/// How one pipeline run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing was appended or sent.
    Ignored,
    /// The backend reply was appended.
    Replied,
    /// The request failed and the fallback apology was appended.
    FellBack(ServiceError),
}

pub struct ChatController<S, C> {
    state: RwSignal<ChatState>,
    draft: RwSignal<String>,
    service: Rc<S>,
    clock: Rc<C>,
    timeout_ms: u32,
}

impl<S, C> Clone for ChatController<S, C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            draft: self.draft,
            service: Rc::clone(&self.service),
            clock: Rc::clone(&self.clock),
            timeout_ms: self.timeout_ms,
        }
    }
}

impl<S: ChatService, C: Clock> ChatController<S, C> {
    pub fn new(
        state: RwSignal<ChatState>,
        draft: RwSignal<String>,
        service: Rc<S>,
        clock: Rc<C>,
        timeout_ms: u32,
    ) -> Self {
        Self { state, draft, service, clock, timeout_ms }
    }

    pub fn state(&self) -> RwSignal<ChatState> {
        self.state
    }

    pub fn draft(&self) -> RwSignal<String> {
        self.draft
    }

    /// Mirror the composer text; this also drives the send button state.
    pub fn set_draft(&self, text: String) {
        self.draft.try_update(|d| *d = text);
    }

    /// Send the composer text and clear the composer.
    pub async fn send_draft(&self) -> SendOutcome {
        let Some(text) = self.draft.try_with_untracked(Clone::clone) else {
            return SendOutcome::Ignored;
        };
        self.dispatch(&text, true).await
    }

    pub async fn send_quick_reply(&self, text: &str) -> SendOutcome {
        self.dispatch(text, false).await
    }

    /// Mark `mood` as the only active mood and send its status sentence.
    pub async fn select_mood(&self, mood: Mood) -> SendOutcome {
        self.state.try_update(|s| s.mood = Some(mood));
        self.dispatch(mood.status_sentence(), false).await
    }

    /// Start over: empty composer, no active mood. The transcript stays.
    pub fn start_new_checkin(&self) {
        self.draft.try_update(String::clear);
        self.state.try_update(|s| s.mood = None);
    }

    async fn dispatch(&self, raw: &str, from_draft: bool) -> SendOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        let sent_at = self.clock.now_ms();
        let label = self.clock.time_label(sent_at);
        let Some(user_message_id) = self.state.try_update(|s| {
            let id = s.push_message(Sender::User, text, sent_at, label, None);
            s.pending += 1;
            id
        }) else {
            return SendOutcome::Ignored;
        };
        if from_draft {
            self.draft.try_update(String::clear);
        }

        let request = ChatRequest { message: text.to_owned() };
        let result = with_timeout(&*self.clock, self.timeout_ms, self.service.send_chat(&request))
            .await
            .unwrap_or_else(|| Err(ServiceError::Timeout { after_ms: self.timeout_ms }));

        let (reply, outcome) = match result {
            Ok(reply) => (reply.response, SendOutcome::Replied),
            Err(err) => {
                leptos::logging::warn!("chat request failed: {err}");
                (FALLBACK_REPLY.to_owned(), SendOutcome::FellBack(err))
            }
        };

        let replied_at = self.clock.now_ms();
        let label = self.clock.time_label(replied_at);
        self.state.try_update(|s| {
            s.pending = s.pending.saturating_sub(1);
            s.push_message(Sender::Bot, reply, replied_at, label, Some(user_message_id));
        });
        outcome
    }
}
