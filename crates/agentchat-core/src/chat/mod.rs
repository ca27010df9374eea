//! Chat request handling: relay the prompt, format the reply.

pub mod service;
