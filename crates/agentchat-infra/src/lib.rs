//! Infrastructure implementations for agentchat.
//!
//! Implements the traits defined in agentchat-core against real I/O: the
//! HTTP relay to the upstream agent and the `config.toml` loader.

pub mod agent;
pub mod config;
