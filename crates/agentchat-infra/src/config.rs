//! Configuration loader for agentchat.
//!
//! Reads `config.toml` from the config directory (`~/.agentchat/` by
//! default) and deserializes it into [`AppConfig`]. Falls back to defaults
//! when the file is missing or malformed. The agent location can then be
//! overridden from the environment with `SERVER_URL` and
//! `ROUTING_AGENT_PORT`.

use std::path::{Path, PathBuf};

use agentchat_types::config::AppConfig;
use agentchat_types::error::ConfigError;

/// Environment variable naming the agent host (or full URL).
pub const SERVER_URL_VAR: &str = "SERVER_URL";

/// Environment variable naming the agent port.
pub const AGENT_PORT_VAR: &str = "ROUTING_AGENT_PORT";

/// Resolve the config directory.
///
/// `AGENTCHAT_HOME` wins, then `~/.agentchat`, then `./.agentchat`.
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("AGENTCHAT_HOME") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".agentchat");
    }

    PathBuf::from(".agentchat")
}

/// Load configuration from `{config_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_config(config_dir: &Path) -> AppConfig {
    let config_path = config_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Load configuration from an explicitly named file.
///
/// Unlike [`load_config`], a missing or malformed file is an error: the user
/// asked for this file by name.
pub async fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Apply `SERVER_URL` / `ROUTING_AGENT_PORT` overrides.
///
/// `lookup` abstracts the environment so callers pass
/// `|key| std::env::var(key).ok()` and tests pass a map. Empty values are
/// ignored.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(url) = non_empty(SERVER_URL_VAR) {
        config.agent.url = normalize_agent_url(&url);
    }

    if let Some(port) = non_empty(AGENT_PORT_VAR) {
        let port = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        config.agent.port = Some(port);
    }

    Ok(config)
}

/// Prepend `http://` to a bare host name.
pub fn normalize_agent_url(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[server]
host = "127.0.0.1"
port = 9000

[agent]
url = "http://agents.local"
port = 8080
timeout_secs = 30
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.agent.base_url(), "http://agents.local:8080");
        assert_eq!(config.agent.timeout_secs, 30);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn load_config_file_reports_missing_and_malformed() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(matches!(
            load_config_file(&missing).await,
            Err(ConfigError::Read { .. })
        ));

        let bad = tmp.path().join("bad.toml");
        tokio::fs::write(&bad, "[server]\nport = \"eighty\"").await.unwrap();
        assert!(matches!(
            load_config_file(&bad).await,
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn env_overrides_agent_location() {
        let config = apply_env_overrides(
            AppConfig::default(),
            env(&[(SERVER_URL_VAR, "routing-agent"), (AGENT_PORT_VAR, "10020")]),
        )
        .unwrap();
        assert_eq!(config.agent.url, "http://routing-agent");
        assert_eq!(config.agent.port, Some(10020));
        assert_eq!(config.agent.base_url(), "http://routing-agent:10020");
    }

    #[test]
    fn env_overrides_ignore_empty_values() {
        let config = apply_env_overrides(
            AppConfig::default(),
            env(&[(SERVER_URL_VAR, "  "), (AGENT_PORT_VAR, "")]),
        )
        .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn env_override_rejects_bad_port() {
        let err = apply_env_overrides(AppConfig::default(), env(&[(AGENT_PORT_VAR, "99999")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "99999"));
    }

    #[test]
    fn normalize_keeps_explicit_scheme() {
        assert_eq!(normalize_agent_url("https://a.example"), "https://a.example");
        assert_eq!(normalize_agent_url("localhost"), "http://localhost");
    }
}
