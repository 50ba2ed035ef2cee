//! Chat session domain entities

use serde::{Deserialize, Serialize};

/// Text of the transient bot message shown while a question is in flight.
pub const PLACEHOLDER_TEXT: &str = "...";

/// Default session title until the first user message arrives.
pub const DEFAULT_TITLE: &str = "New Chat";

/// Canned bot reply when a question is submitted with no policy in focus.
pub const NO_POLICY_RESPONSE: &str = "I'm here to help with policy questions. \
Please select a policy from the policy listing page or tell me what type of \
insurance you're interested in!";

/// Bot reply substituted when the advisor endpoint fails.
pub const ADVISOR_ERROR_RESPONSE: &str =
    "Sorry, I encountered an error processing your question. Please try again.";

/// Monotonic per-session message id.
pub type MessageId = u64;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A message in a chat transcript (Entity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Follow-up suggestions attached to an advisor answer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_up_questions: Vec<String>,
}

/// One independent chat transcript (Entity)
///
/// Messages are append-only and keep arrival order. A session is never
/// deleted within a run; the placeholder bot message keeps its id when
/// replaced with the real answer.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    title: String,
    messages: Vec<ChatMessage>,
    next_message_id: MessageId,
}

impl ChatSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            next_message_id: 1,
        }
    }

    /// New session opened with a bot greeting.
    pub fn with_greeting(id: impl Into<String>, greeting: impl Into<String>) -> Self {
        let mut session = Self::new(id);
        session.push(Sender::Bot, greeting);
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a message, deriving the session title from the first user
    /// message while the title is still the default.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> MessageId {
        let text = text.into();
        if sender == Sender::User && self.title == DEFAULT_TITLE {
            self.title = derive_title(&text);
        }
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            follow_up_questions: Vec::new(),
        });
        id
    }

    /// Append the transient "thinking" bot message.
    pub fn push_placeholder(&mut self) -> MessageId {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(ChatMessage {
            id,
            text: PLACEHOLDER_TEXT.to_string(),
            sender: Sender::Bot,
            follow_up_questions: Vec::new(),
        });
        id
    }

    /// Replace a message's text in place, keeping its id and position.
    ///
    /// Returns false when no message with that id exists (e.g. a stale
    /// advisor reply after the session moved on).
    pub fn replace_text(
        &mut self,
        id: MessageId,
        text: impl Into<String>,
        follow_ups: Vec<String>,
    ) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(msg) => {
                msg.text = text.into();
                msg.follow_up_questions = follow_ups;
                true
            }
            None => false,
        }
    }

    pub fn contains_message(&self, id: MessageId) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }
}

/// First 30 characters of the message, with an ellipsis when truncated.
fn derive_title(message: &str) -> String {
    let truncated: String = message.chars().take(30).collect();
    if message.chars().count() > 30 {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_derived_from_first_user_message() {
        let mut session = ChatSession::new("chat-1");
        session.push(Sender::Bot, "Hello!");
        assert_eq!(session.title(), "New Chat");

        session.push(Sender::User, "What about copayment?");
        assert_eq!(session.title(), "What about copayment?");

        session.push(Sender::User, "Another question entirely");
        assert_eq!(session.title(), "What about copayment?");
    }

    #[test]
    fn test_long_title_truncated_at_30() {
        let mut session = ChatSession::new("chat-1");
        session.push(
            Sender::User,
            "Which of these policies offers the best coverage overall?",
        );
        assert_eq!(session.title(), "Which of these policies offers...");
        assert_eq!(session.title().chars().count(), 33);
    }

    #[test]
    fn test_messages_append_only_and_ordered() {
        let mut session = ChatSession::new("chat-1");
        let a = session.push(Sender::User, "first");
        let b = session.push(Sender::Bot, "second");
        let c = session.push(Sender::User, "third");
        assert!(a < b && b < c);
        let order: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn test_placeholder_replaced_in_place_same_id() {
        let mut session = ChatSession::new("chat-1");
        session.push(Sender::User, "question");
        let placeholder = session.push_placeholder();
        session.push(Sender::User, "follow-on typed early");

        assert!(session.replace_text(placeholder, "the answer", vec!["more?".into()]));
        let msg = session
            .messages()
            .iter()
            .find(|m| m.id == placeholder)
            .unwrap();
        assert_eq!(msg.text, "the answer");
        assert_eq!(msg.follow_up_questions, vec!["more?".to_string()]);
        // Position unchanged: still second of three
        assert_eq!(session.messages()[1].id, placeholder);
    }

    #[test]
    fn test_replace_missing_id_is_noop() {
        let mut session = ChatSession::new("chat-1");
        session.push(Sender::User, "question");
        assert!(!session.replace_text(999, "late answer", vec![]));
        assert_eq!(session.messages().len(), 1);
    }
}
