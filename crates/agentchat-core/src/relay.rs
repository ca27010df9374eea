//! AgentRelay trait definition.
//!
//! The relay is the only way the chat service reaches the upstream agent.
//! Implementations live in agentchat-infra (e.g., `HttpAgentRelay`).

use std::future::Future;

use agentchat_types::error::RelayError;

/// Trait for transports that forward a prompt to the upstream agent.
///
/// Uses RPITIT so implementations can write `async fn send`.
pub trait AgentRelay: Send + Sync {
    /// Human-readable relay name for logs (e.g., "http").
    fn name(&self) -> &str;

    /// Send the prompt and return the agent's raw reply text.
    fn send(&self, prompt: &str) -> impl Future<Output = Result<String, RelayError>> + Send;
}

/// Relay a prompt and always come back with text.
///
/// Failures are turned into their user-facing description so the formatter
/// renders them like any other reply.
pub async fn relay_text<R: AgentRelay>(relay: &R, prompt: &str) -> String {
    match relay.send(prompt).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(relay = relay.name(), error = %err, "agent relay failed");
            err.to_string()
        }
    }
}
