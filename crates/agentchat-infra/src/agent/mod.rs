//! Transports to the upstream agent.

pub mod http;

pub use http::HttpAgentRelay;
