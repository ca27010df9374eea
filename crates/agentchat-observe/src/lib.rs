//! Observability setup for agentchat: structured logging with an optional
//! OpenTelemetry bridge.

pub mod tracing_setup;
