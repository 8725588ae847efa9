//! Conversation state for the advisor chat.
//!
//! Two states: `Idle` and `AwaitingReply`. A non-blank submission while idle
//! appends the user's message and moves to `AwaitingReply`; the caller is
//! then responsible for starting the reply timer. When the reply arrives,
//! [`AdvisorSession::complete`] appends it and returns to `Idle`.
//! Submissions while a reply is pending are refused, so at most one request
//! is ever outstanding.

use serde::{Deserialize, Serialize};

use super::simulated::GREETING;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponderState {
    Idle,
    AwaitingReply,
}

/// Outcome of [`AdvisorSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Message appended; start the reply timer for this query.
    Accepted(String),
    /// Blank input, nothing happened.
    Empty,
    /// A reply is already pending, nothing happened.
    Busy,
}

/// Append-only conversation log plus the responder state.
#[derive(Debug, Clone)]
pub struct AdvisorSession {
    messages: Vec<ChatMessage>,
    state: ResponderState,
}

impl AdvisorSession {
    /// New conversation opened by the advisor's greeting.
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    pub fn with_greeting(greeting: &str) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            state: ResponderState::Idle,
        }
    }

    pub fn submit(&mut self, text: &str) -> Submission {
        if text.trim().is_empty() {
            return Submission::Empty;
        }
        if self.state == ResponderState::AwaitingReply {
            log::debug!("Submission refused: reply still pending");
            return Submission::Busy;
        }

        self.messages.push(ChatMessage::user(text));
        self.state = ResponderState::AwaitingReply;
        Submission::Accepted(text.to_string())
    }

    /// Append the advisor's reply. Ignored (returns false) unless a reply
    /// is pending.
    pub fn complete(&mut self, reply: impl Into<String>) -> bool {
        if self.state != ResponderState::AwaitingReply {
            log::warn!("Dropping advisor reply: no request pending");
            return false;
        }
        self.messages.push(ChatMessage::assistant(reply));
        self.state = ResponderState::Idle;
        true
    }

    /// Give up on the pending reply without appending anything.
    pub fn abandon(&mut self) {
        self.state = ResponderState::Idle;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn state(&self) -> ResponderState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == ResponderState::AwaitingReply
    }
}

impl Default for AdvisorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_greeting() {
        let session = AdvisorSession::new();
        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].role, ChatRole::Assistant);
        assert_eq!(session.messages()[0].content, GREETING);
        assert_eq!(session.state(), ResponderState::Idle);
    }

    #[test]
    fn test_blank_submission_is_noop() {
        let mut session = AdvisorSession::new();
        for text in ["", " ", "\t\n  "] {
            assert_eq!(session.submit(text), Submission::Empty);
        }
        assert_eq!(session.len(), 1);
        assert!(!session.is_awaiting());
    }

    #[test]
    fn test_submit_appends_user_message() {
        let mut session = AdvisorSession::new();
        let before = session.len();
        assert_eq!(
            session.submit("What's my balance?"),
            Submission::Accepted("What's my balance?".to_string())
        );
        assert_eq!(session.len(), before + 1);
        assert_eq!(session.messages()[before], ChatMessage::user("What's my balance?"));
        assert!(session.is_awaiting());
    }

    #[test]
    fn test_content_kept_as_typed() {
        let mut session = AdvisorSession::new();
        session.submit("  hi  ");
        assert_eq!(session.messages()[1].content, "  hi  ");
    }

    #[test]
    fn test_busy_while_awaiting() {
        let mut session = AdvisorSession::new();
        session.submit("first");
        assert_eq!(session.submit("second"), Submission::Busy);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_complete_returns_to_idle() {
        let mut session = AdvisorSession::new();
        session.submit("first");
        assert!(session.complete("reply"));
        assert_eq!(session.len(), 3);
        assert_eq!(session.messages()[2].role, ChatRole::Assistant);
        assert_eq!(session.state(), ResponderState::Idle);
        assert!(matches!(session.submit("second"), Submission::Accepted(_)));
    }

    #[test]
    fn test_unsolicited_reply_ignored() {
        let mut session = AdvisorSession::new();
        assert!(!session.complete("stray"));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_abandon_appends_nothing() {
        let mut session = AdvisorSession::new();
        session.submit("first");
        session.abandon();
        assert_eq!(session.len(), 2);
        assert!(!session.is_awaiting());
        assert!(!session.complete("late"));
    }
}
