//! HttpAgentRelay -- concrete [`AgentRelay`] over plain HTTP.
//!
//! POSTs `{"message": prompt}` to `{base_url}/message` and reads the
//! `response` field of the JSON reply.

use std::time::Duration;

use agentchat_core::relay::AgentRelay;
use agentchat_types::chat::{AgentMessageReply, AgentMessageRequest, NO_RESPONSE_TEXT};
use agentchat_types::config::AgentConfig;
use agentchat_types::error::RelayError;

/// Relay that talks to the agent's `/message` endpoint.
///
/// Holds a single `reqwest::Client` so connections are pooled across chat
/// requests.
#[derive(Debug, Clone)]
pub struct HttpAgentRelay {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpAgentRelay {
    /// Path of the agent endpoint, appended to the base URL.
    const MESSAGE_PATH: &'static str = "/message";

    /// Create a relay from agent configuration.
    pub fn new(config: &AgentConfig) -> Result<Self, RelayError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            timeout,
        })
    }

    /// Base URL the relay posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, Self::MESSAGE_PATH)
    }
}

impl AgentRelay for HttpAgentRelay {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, prompt: &str) -> Result<String, RelayError> {
        let url = self.url();
        let body = AgentMessageRequest {
            message: prompt.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Transport(format!(
                        "timed out after {}s waiting for {url}",
                        self.timeout.as_secs()
                    ))
                } else {
                    RelayError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %url, "agent returned error status");
            return Err(RelayError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let reply: AgentMessageReply = serde_json::from_str(&text)
            .map_err(|e| RelayError::Decode(format!("invalid agent response: {e}")))?;

        Ok(reply
            .response
            .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()))
    }
}
