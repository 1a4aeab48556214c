//! Backend client struct, request building, and response parsing.

use super::config::BackendConfig;

/// Text substituted when a success response carries no usable `reply`
/// field.
pub const EMPTY_REPLY_FALLBACK: &str = "I received an empty response.";

/// HTTP client for the reply endpoint.
pub struct BackendClient {
    pub(crate) config: BackendConfig,
    pub(crate) http: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
                .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    /// Build the JSON request body for the reply endpoint.
    pub(crate) fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({ "prompt": prompt })
    }

    /// Extract the reply text from a success response. Any shape without
    /// a string `reply` field is tolerated via the fallback text.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> String {
        match json.get("reply").and_then(|v| v.as_str()) {
            Some(reply) => reply.to_string(),
            None => EMPTY_REPLY_FALLBACK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        BackendClient::new(BackendConfig::default())
    }

    #[test]
    fn request_body_wraps_prompt() {
        let body = client().build_request_body("2+2=");
        assert_eq!(body, serde_json::json!({ "prompt": "2+2=" }));
    }

    #[test]
    fn parse_response_extracts_reply() {
        let reply = client().parse_response(serde_json::json!({ "reply": "Hello there" }));
        assert_eq!(reply, "Hello there");
    }

    #[test]
    fn parse_response_empty_object_falls_back() {
        let reply = client().parse_response(serde_json::json!({}));
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn parse_response_non_string_reply_falls_back() {
        let reply = client().parse_response(serde_json::json!({ "reply": 42 }));
        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn parse_response_ignores_extra_fields() {
        let reply = client().parse_response(serde_json::json!({
            "reply": "ok",
            "model": "auto",
        }));
        assert_eq!(reply, "ok");
    }
}
