//! Conversation session management.
//!
//! A `Session` holds the ordered message history and the pending flag,
//! and owns the two operations of the conversation state machine:
//! resetting to a fresh chat and exchanging one message for one reply.

mod exchange;
mod manager;
mod types;


pub use exchange::SendOutcome;
pub use manager::Session;
