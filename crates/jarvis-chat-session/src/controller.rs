use log::{info, warn};
use uuid::Uuid;

use crate::backend::{BackendError, ChatBackend, ChatReply, ChatRequest};
use crate::message::Message;

/// Shown in place of a reply whenever the request fails for any reason.
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error while processing your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// Conversation history plus the one-request-at-a-time send state machine.
///
/// Sending is split in two so a caller can run the network call elsewhere:
/// [`begin_send`](Self::begin_send) records the user turn and hands back the
/// request, [`complete`](Self::complete) records whatever came back.
#[derive(Debug)]
pub struct ChatSession<B> {
    backend: B,
    session_id: String,
    messages: Vec<Message>,
    state: SessionState,
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn new(backend: B, session_id: impl Into<String>) -> Self {
        Self {
            backend,
            session_id: session_id.into(),
            messages: Vec::new(),
            state: SessionState::Idle,
        }
    }

    pub fn with_generated_id(backend: B) -> Self {
        Self::new(backend, Uuid::new_v4().to_string())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Most recent assistant turn, if any.
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.is_assistant())
    }

    /// Accepts `text` as the next user turn.
    ///
    /// Returns `None` without touching any state when `text` is blank or a
    /// reply is still outstanding.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if self.state == SessionState::AwaitingReply {
            info!("Ignoring message while a reply is pending");
            return None;
        }

        self.messages.push(Message::user(text));
        self.state = SessionState::AwaitingReply;
        Some(ChatRequest {
            message: text.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    /// Records the outcome of a request started by [`begin_send`](Self::begin_send).
    ///
    /// Errors never escape: they become [`FALLBACK_REPLY`].
    pub fn complete(&mut self, outcome: Result<ChatReply, BackendError>) -> &Message {
        let message = match outcome {
            Ok(reply) => Message::assistant(reply.response, reply.data_source),
            Err(err) => {
                warn!("Chat request failed: {err}");
                Message::assistant(FALLBACK_REPLY, None)
            }
        };
        self.messages.push(message);
        self.state = SessionState::Idle;
        &self.messages[self.messages.len() - 1]
    }

    /// Sends `text` and waits for the reply. Returns whether it was accepted.
    pub fn send_message(&mut self, text: &str) -> bool {
        let Some(request) = self.begin_send(text) else {
            return false;
        };
        let outcome = self.backend.send(&request);
        self.complete(outcome);
        true
    }

    /// Empties the history and tells the backend to forget the session.
    ///
    /// A request already in flight is not cancelled; its reply is appended
    /// to the emptied history when it arrives.
    pub fn clear_chat(&mut self) {
        self.backend.clear(&self.session_id);
        self.messages.clear();
        info!("Cleared chat session {}", self.session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeBackend {
        replies: RefCell<Vec<Result<ChatReply, BackendError>>>,
        sent: RefCell<Vec<ChatRequest>>,
        cleared: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn replying(replies: Vec<Result<ChatReply, BackendError>>) -> Self {
            Self {
                replies: RefCell::new(replies),
                ..Self::default()
            }
        }
    }

    impl ChatBackend for FakeBackend {
        fn send(&self, request: &ChatRequest) -> Result<ChatReply, BackendError> {
            self.sent.borrow_mut().push(request.clone());
            self.replies.borrow_mut().remove(0)
        }

        fn clear(&self, session_id: &str) {
            self.cleared.borrow_mut().push(session_id.to_string());
        }
    }

    fn reply(text: &str) -> Result<ChatReply, BackendError> {
        Ok(ChatReply {
            response: text.into(),
            session_id: None,
            data_source: Some("live".into()),
        })
    }

    fn status_error() -> Result<ChatReply, BackendError> {
        Err(BackendError::Status {
            status: 500,
            body: "boom".into(),
        })
    }

    #[test]
    fn successful_send_appends_both_turns() {
        let mut session = ChatSession::new(FakeBackend::replying(vec![reply("Hello")]), "s1");

        assert!(session.send_message("  hi  "));

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(session.messages()[0].content, "hi");
        assert_eq!(session.messages()[1].content, "Hello");
        assert_eq!(session.messages()[1].data_source.as_deref(), Some("live"));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(
            session.backend().sent.borrow()[0],
            ChatRequest {
                message: "hi".into(),
                session_id: "s1".into(),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn blank_text_is_rejected(#[case] text: &str) {
        let mut session = ChatSession::new(FakeBackend::default(), "s1");
        assert!(!session.send_message(text));
        assert!(session.messages().is_empty());
        assert!(session.backend().sent.borrow().is_empty());
    }

    #[test]
    fn failure_becomes_fallback_reply() {
        let mut session = ChatSession::new(FakeBackend::replying(vec![status_error()]), "s1");

        assert!(session.send_message("how are my ads?"));

        let last = session.last_assistant().unwrap();
        assert_eq!(last.content, FALLBACK_REPLY);
        assert_eq!(last.data_source, None);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn second_send_is_rejected_while_awaiting() {
        let mut session = ChatSession::new(FakeBackend::default(), "s1");

        assert!(session.begin_send("first").is_some());
        assert_eq!(session.state(), SessionState::AwaitingReply);
        assert!(session.begin_send("second").is_none());
        assert_eq!(session.messages().len(), 1);

        session.complete(reply("done"));
        assert!(session.begin_send("second").is_some());
    }

    #[test]
    fn clear_notifies_backend_and_empties_history() {
        let mut session =
            ChatSession::new(FakeBackend::replying(vec![reply("a"), reply("b")]), "s1");
        session.send_message("one");
        session.send_message("two");

        session.clear_chat();

        assert!(session.messages().is_empty());
        assert_eq!(*session.backend().cleared.borrow(), vec!["s1".to_string()]);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn late_reply_after_clear_is_appended() {
        let mut session = ChatSession::new(FakeBackend::default(), "s1");
        session.begin_send("slow question").unwrap();

        session.clear_chat();
        assert_eq!(session.state(), SessionState::AwaitingReply);

        session.complete(reply("late answer"));
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, "late answer");
    }

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = ChatSession::with_generated_id(FakeBackend::default());
        let b = ChatSession::with_generated_id(FakeBackend::default());
        assert_ne!(a.session_id(), b.session_id());
        assert!(Uuid::parse_str(a.session_id()).is_ok());
    }
}
