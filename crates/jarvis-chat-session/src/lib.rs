//! Conversation state for a JARVIS chat session and the HTTP client that
//! talks to the backend.
//!
//! [`ChatSession`] is the only mutable piece: it owns the message history and
//! the Idle / Awaiting-Reply state machine. The backend sits behind the
//! [`ChatBackend`] trait so the controller can be driven without a network.

pub mod backend;
pub mod controller;
pub mod message;

pub use backend::{BackendError, ChatBackend, ChatReply, ChatRequest, ChatStatus, HttpBackend};
pub use controller::{ChatSession, FALLBACK_REPLY, SessionState};
pub use message::{Message, Role};
