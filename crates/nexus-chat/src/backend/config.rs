//! Backend client configuration.

pub(crate) const DEFAULT_ENDPOINT: &str = "https://arsalan-ai-backend.onrender.com/ask";

/// Reply endpoint configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
