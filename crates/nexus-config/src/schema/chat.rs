//! Chat presentation configuration types.

use serde::{Deserialize, Serialize};

/// Greeting and banner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSection {
    /// Assistant message seeded into every fresh conversation.
    pub greeting: String,
    /// Model label shown in the banner.
    pub model_label: String,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            greeting: "Hello! I am your advanced AI assistant. Ready to explore ideas with you."
                .into(),
            model_label: "OpenRouter/auto".into(),
        }
    }
}
