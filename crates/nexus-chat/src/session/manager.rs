//! Session struct and history management.

use std::sync::atomic::{AtomicBool, Ordering};

use nexus_common::SessionId;
use tracing::debug;

use crate::{Message, MessageId, Sender};

/// A single conversation: ordered message history plus the pending flag.
///
/// The history is append-only except for [`Session::start_new_chat`],
/// and is never empty: construction and reset both seed it with one
/// assistant greeting message.
pub struct Session {
    pub(super) id: SessionId,
    /// Conversation history, insertion order = chronological order.
    pub(super) messages: Vec<Message>,
    /// Greeting text seeded into the history on creation and reset.
    pub(super) greeting: String,
    /// Next message identity; monotonic within the session.
    pub(super) next_id: u64,
    /// Whether a reply fetch is outstanding.
    pub(super) pending: AtomicBool,
}

impl Session {
    /// Create a session seeded with one assistant greeting message.
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut session = Self {
            id: SessionId::new(),
            messages: Vec::new(),
            greeting: greeting.into(),
            next_id: 1,
            pending: AtomicBool::new(false),
        };
        session.seed();
        session
    }

    /// Discard the history and reseed with a fresh greeting message.
    ///
    /// Always yields the canonical single-message state; the greeting
    /// carries a new identity on every call. Never fails.
    pub fn start_new_chat(&mut self) {
        debug!(session = %self.id, "starting new chat");
        self.messages.clear();
        self.pending.store(false, Ordering::Release);
        self.seed();
    }

    fn seed(&mut self) {
        let greeting = self.greeting.clone();
        self.push(Sender::Assistant, greeting);
    }

    /// Append a message with the next identity.
    pub(super) fn push(&mut self, sender: Sender, text: String) {
        push_message(&mut self.messages, &mut self.next_id, sender, text);
    }

    /// The session identity, for log correlation.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether a reply fetch is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Number of messages in the history.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// Append a message with the next identity.
///
/// Free function over the history fields so appends can run while a
/// guard holds a borrow of the session's pending flag.
pub(super) fn push_message(
    messages: &mut Vec<Message>,
    next_id: &mut u64,
    sender: Sender,
    text: String,
) {
    let id = MessageId(*next_id);
    *next_id += 1;
    messages.push(Message { id, sender, text });
}
