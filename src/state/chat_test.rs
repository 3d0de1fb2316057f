use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.mood.is_none());
    assert!(!state.is_typing());
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn push_message_appends_in_order_with_increasing_ids() {
    let mut state = ChatState::default();
    let first = state.push_message(Sender::User, "hello", 1_000.0, "10:00 am", None);
    let second = state.push_message(Sender::Bot, "hi", 2_000.0, "10:00 am", Some(first));
    assert!(second > first);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].text, "hello");
    assert_eq!(state.messages[1].reply_to, Some(first));
}

#[test]
fn sender_css_classes() {
    assert_eq!(Sender::User.css_class(), "user-message");
    assert_eq!(Sender::Bot.css_class(), "bot-message");
}

// =============================================================
// Draft
// =============================================================

#[test]
fn can_send_requires_non_blank_draft() {
    assert!(!can_send(""));
    assert!(!can_send("   \n"));
    assert!(can_send(" hi "));
}

// =============================================================
// Mood
// =============================================================

#[test]
fn every_mood_has_a_first_person_sentence() {
    for mood in Mood::ALL {
        assert!(mood.status_sentence().starts_with("I'm feeling "));
        assert!(mood.status_sentence().contains(&mood.label().to_lowercase()));
    }
}

#[test]
fn mood_sentences_match_expected_text() {
    assert_eq!(Mood::Anxious.status_sentence(), "I'm feeling anxious right now");
    assert_eq!(Mood::Calm.status_sentence(), "I'm feeling calm at the moment");
    assert_eq!(Mood::Neutral.status_sentence(), "I'm feeling neutral today");
}

#[test]
fn mood_css_classes_are_distinct() {
    for (i, a) in Mood::ALL.iter().enumerate() {
        for (j, b) in Mood::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }
}
