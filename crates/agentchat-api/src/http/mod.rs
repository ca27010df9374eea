//! HTTP layer for agentchat.
//!
//! Axum router serving the chat page at `/`, the `/chat` JSON endpoint and
//! a `/health` probe, with CORS and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
