use thiserror::Error;

/// Errors from relaying a prompt to the upstream agent.
///
/// The `Display` output is the human-readable text shown to the user in
/// place of an agent reply.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request failed: {0}")]
    Decode(String),
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid agent port '{0}'")]
    InvalidPort(String),
}
