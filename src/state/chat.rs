//! Transcript and mood for the support chat.
//!
//! The transcript is append-only: messages are never edited or removed.
//! The composer draft lives in its own signal so typing never notifies
//! transcript readers.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// The send control is enabled only for a non-blank draft.
pub fn can_send(draft: &str) -> bool {
    !draft.trim().is_empty()
}

/// Appended in place of a reply whenever the chat request fails.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble responding right now. Please try again.";

/// Canned replies offered under the transcript.
pub const QUICK_REPLIES: [&str; 4] = [
    "I need a moment to breathe",
    "Can we try a grounding exercise?",
    "I'd like to talk about my day",
    "Thank you, that helps",
];

/// State for the chat page.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub mood: Option<Mood>,
    /// Chat requests still awaiting a reply.
    pub pending: usize,
    next_id: u64,
}

impl ChatState {
    /// Append a message and return its id.
    pub fn push_message(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
        timestamp_ms: f64,
        time_label: impl Into<String>,
        reply_to: Option<u64>,
    ) -> u64 {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            text: text.into(),
            timestamp_ms,
            time_label: time_label.into(),
            reply_to,
        });
        self.next_id
    }

    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
    /// Display time, e.g. `"02:05 pm"`.
    pub time_label: String,
    /// For bot messages, the user message this answers.
    pub reply_to: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Anxious,
    Calm,
    Sad,
    Happy,
    Neutral,
}

impl Mood {
    pub const ALL: [Self; 5] = [Self::Anxious, Self::Calm, Self::Sad, Self::Happy, Self::Neutral];

    pub fn label(self) -> &'static str {
        match self {
            Self::Anxious => "Anxious",
            Self::Calm => "Calm",
            Self::Sad => "Sad",
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Anxious => "mood-anxious",
            Self::Calm => "mood-calm",
            Self::Sad => "mood-sad",
            Self::Happy => "mood-happy",
            Self::Neutral => "mood-neutral",
        }
    }

    /// First-person message sent on the user's behalf when the mood is picked.
    pub fn status_sentence(self) -> &'static str {
        match self {
            Self::Anxious => "I'm feeling anxious right now",
            Self::Calm => "I'm feeling calm at the moment",
            Self::Sad => "I'm feeling sad today",
            Self::Happy => "I'm feeling happy right now",
            Self::Neutral => "I'm feeling neutral today",
        }
    }
}
