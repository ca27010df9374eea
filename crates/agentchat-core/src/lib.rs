//! Core logic for agentchat.
//!
//! This crate defines the response formatter and the "port" for reaching the
//! upstream agent (the [`relay::AgentRelay`] trait). It depends only on
//! `agentchat-types` -- never on `agentchat-infra` or any network crate.

pub mod chat;
pub mod format;
pub mod relay;
