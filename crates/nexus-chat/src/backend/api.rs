//! ReplyFetcher trait implementation for BackendClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatError, ReplyFetcher};

use super::client::BackendClient;

/// Error description when a non-success response has an empty body.
const EMPTY_ERROR_BODY: &str = "Server error";

#[async_trait]
impl ReplyFetcher for BackendClient {
    async fn fetch_reply(&self, prompt: &str) -> Result<String, ChatError> {
        let body = self.build_request_body(prompt);

        debug!(endpoint = %self.config.endpoint, "reply request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(%status, "reply request rejected");
            if text.is_empty() {
                return Err(ChatError::Api(EMPTY_ERROR_BODY.to_string()));
            }
            return Err(ChatError::Api(text));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        Ok(self.parse_response(json))
    }
}
