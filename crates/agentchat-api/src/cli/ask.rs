//! `agentchat ask` -- one-shot prompt from the terminal.

use crate::state::AppState;

/// Relay `prompt` and print the formatted reply.
pub async fn ask(state: &AppState, prompt: &str) -> anyhow::Result<()> {
    let html = state.chat_service.reply(prompt).await;
    println!("{html}");
    Ok(())
}
