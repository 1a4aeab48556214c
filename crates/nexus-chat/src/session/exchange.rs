//! The send-message operation: one user message in, one assistant
//! message out.

use tracing::{debug, warn};

use crate::{ReplyFetcher, Sender};

use super::manager::{push_message, Session};
use super::types::PendingGuard;

/// Prefix for assistant messages that carry an absorbed failure.
pub(super) const ERROR_PREFIX: &str = "Error: ";

/// What became of a `send_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// A user message and exactly one assistant message were appended;
    /// carries the assistant text.
    Exchanged(String),
    /// Input was empty after trimming; nothing changed.
    EmptyInput,
    /// A fetch is already outstanding; the call was rejected unchanged.
    Busy,
}

impl Session {
    /// Submit user input and append the fetched assistant reply.
    ///
    /// The input is trimmed first; empty input is a no-op. A submission
    /// while a fetch is outstanding is rejected as a no-op. Failures
    /// never escape: a fetch error becomes an in-band assistant message
    /// prefixed with `"Error: "`. After an accepted call settles, the
    /// history has grown by exactly two messages and `pending` is false
    /// again, whichever path the fetch took.
    pub async fn send_message(
        &mut self,
        fetcher: &dyn ReplyFetcher,
        raw_input: &str,
    ) -> SendOutcome {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return SendOutcome::EmptyInput;
        }

        // Field-level borrows: the guard holds `pending` for the rest of
        // the function, while the history fields stay free to mutate.
        let Some(_guard) = PendingGuard::acquire(&self.pending) else {
            debug!(session = %self.id, "submission rejected, fetch outstanding");
            return SendOutcome::Busy;
        };

        push_message(
            &mut self.messages,
            &mut self.next_id,
            Sender::User,
            trimmed.to_string(),
        );

        let reply = match fetcher.fetch_reply(trimmed).await {
            Ok(text) => text,
            Err(e) => {
                warn!(session = %self.id, error = %e, "reply fetch failed");
                format!("{ERROR_PREFIX}{e}")
            }
        };

        push_message(
            &mut self.messages,
            &mut self.next_id,
            Sender::Assistant,
            reply.clone(),
        );
        SendOutcome::Exchanged(reply)
    }
}
