//! Wire payloads for the chat endpoint and the upstream agent.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat` sent by the chat page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-text prompt typed by the user. Missing means empty.
    #[serde(default)]
    pub prompt: String,
}

/// Body returned from `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// HTML fragment ready to be inserted into the message container.
    pub response: String,
}

/// Body posted to the upstream agent's `/message` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMessageRequest {
    pub message: String,
}

/// Body returned by the upstream agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentMessageReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Text used when the agent answers successfully but without a `response`.
pub const NO_RESPONSE_TEXT: &str = "No response from agent.";
