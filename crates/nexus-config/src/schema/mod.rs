//! Configuration schema with serde defaults.

mod backend;
mod chat;

pub use backend::BackendSection;
pub use chat::ChatSection;

use serde::{Deserialize, Serialize};

/// Top-level Nexus configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusConfig {
    pub backend: BackendSection,
    pub chat: ChatSection,
}
