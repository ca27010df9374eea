//! Shared domain types for agentchat.
//!
//! This crate contains the types passed between the formatter, the agent
//! relay and the HTTP front end: rendered blocks, chat wire payloads,
//! configuration and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod block;
pub mod chat;
pub mod config;
pub mod error;
