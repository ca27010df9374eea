//! Chat service composing the agent relay and the response formatter.
//!
//! ChatService is generic over [`AgentRelay`] to keep agentchat-core free of
//! network code; the API layer pins it to the HTTP relay.

use tracing::{debug, info};

use crate::format::{join_blocks, render_blocks};
use crate::relay::{relay_text, AgentRelay};

/// Turns a user prompt into a rendered HTML fragment.
pub struct ChatService<R: AgentRelay> {
    relay: R,
}

impl<R: AgentRelay> ChatService<R> {
    /// Create a new chat service over the given relay.
    pub fn new(relay: R) -> Self {
        Self { relay }
    }

    /// Access the relay.
    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Relay `prompt` to the agent and format whatever comes back.
    ///
    /// Never fails: transport errors arrive as text and are rendered with the
    /// same rules as a normal reply.
    pub async fn reply(&self, prompt: &str) -> String {
        let prompt = prompt.trim();
        debug!(relay = self.relay.name(), prompt_len = prompt.len(), "relaying prompt");

        let raw = relay_text(&self.relay, prompt).await;
        let blocks = render_blocks(&raw);

        info!(
            relay = self.relay.name(),
            raw_len = raw.len(),
            blocks = blocks.len(),
            "formatted agent reply"
        );
        join_blocks(&blocks)
    }
}
