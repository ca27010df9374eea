//! Configuration types for agentchat.
//!
//! `AppConfig` mirrors `config.toml`. Every field has a default so a missing
//! or partial file still yields a usable configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub agent: AgentConfig,
}

/// Where the chat front end listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,

    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

/// How to reach the upstream agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Scheme and host of the agent, e.g. `http://localhost`.
    #[serde(default = "default_agent_url")]
    pub url: String,

    /// Port appended to `url` when set.
    #[serde(default)]
    pub port: Option<u16>,

    /// Whole-request timeout for one relay call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_agent_url() -> String {
    "http://localhost".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            url: default_agent_url(),
            port: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AgentConfig {
    /// Base URL of the agent with the port applied and no trailing slash.
    pub fn base_url(&self) -> String {
        let url = self.url.trim_end_matches('/');
        match self.port {
            Some(port) => format!("{url}:{port}"),
            None => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_port_8000() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.agent.timeout_secs, 300);
        assert_eq!(config.agent.base_url(), "http://localhost");
    }

    #[test]
    fn base_url_appends_port_and_drops_trailing_slash() {
        let agent = AgentConfig {
            url: "http://agents.internal/".to_string(),
            port: Some(8080),
            timeout_secs: 5,
        };
        assert_eq!(agent.base_url(), "http://agents.internal:8080");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[agent]
port = 9000
"#,
        )
        .unwrap();
        assert_eq!(config.agent.port, Some(9000));
        assert_eq!(config.agent.url, "http://localhost");
        assert_eq!(config.server, ServerConfig::default());
    }
}
