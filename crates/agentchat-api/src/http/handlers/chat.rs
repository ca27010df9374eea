//! Chat endpoint.
//!
//! POST /chat with `{ "prompt": "..." }` relays the prompt to the agent and
//! answers `{ "response": "<html fragment>" }`. Agent failures are rendered
//! into the fragment, so a well-formed request always gets a 200.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use agentchat_types::chat::{ChatRequest, ChatResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /chat -- relay a prompt and return the formatted reply.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = body?;

    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("chat", %request_id);

    let response = state
        .chat_service
        .reply(&request.prompt)
        .instrument(span)
        .await;

    Ok(Json(ChatResponse { response }))
}
