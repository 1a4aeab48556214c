//! Reply endpoint configuration types.

use serde::{Deserialize, Serialize};

/// Reply endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    /// URL the `{"prompt": ...}` POST is sent to.
    pub endpoint: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            endpoint: "https://arsalan-ai-backend.onrender.com/ask".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
