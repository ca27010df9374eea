//! Application state wiring the chat service to the HTTP relay.
//!
//! ChatService is generic over the relay trait; AppState pins it to the
//! concrete infra implementation.

use std::sync::Arc;

use agentchat_core::chat::service::ChatService;
use agentchat_infra::agent::HttpAgentRelay;
use agentchat_types::config::AppConfig;

/// Chat service pinned to the HTTP relay.
pub type ConcreteChatService = ChatService<HttpAgentRelay>;

/// Shared application state, used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the relay and chat service from configuration.
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        let relay = HttpAgentRelay::new(&config.agent)?;
        tracing::debug!(agent = relay.base_url(), "agent relay ready");

        Ok(Self {
            chat_service: Arc::new(ChatService::new(relay)),
            config: Arc::new(config),
        })
    }
}
