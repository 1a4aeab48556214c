//! Chat engine for Nexus.
//!
//! Provides the conversation state machine and the HTTP reply backend:
//! - Message history seeded with an assistant greeting
//! - Single-flight submissions gated by a pending flag
//! - Fetch failures absorbed into in-band assistant messages

pub mod backend;
pub mod session;

use async_trait::async_trait;

pub use backend::{BackendClient, BackendConfig};
pub use session::{SendOutcome, Session};

/// Produces an assistant reply for a user prompt.
///
/// The sole external collaborator of [`Session`]. Implemented over HTTP
/// by [`BackendClient`]; tests substitute mocks.
#[async_trait]
pub trait ReplyFetcher: Send + Sync {
    async fn fetch_reply(&self, prompt: &str) -> Result<String, ChatError>;
}

/// One entry in the conversation history. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Message identity, monotonic within one session. Carries no meaning
/// beyond ordering and display identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a reply fetch failed. `Display` is the human-readable description
/// the session surfaces after its error prefix, so variants format as
/// their payload alone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// Non-success status; the payload is the response body's error text.
    #[error("{0}")]
    Api(String),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Parse(String),
}
