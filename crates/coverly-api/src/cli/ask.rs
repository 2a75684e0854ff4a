//! One-shot question command.
//!
//! Sends a single message with no conversation state and prints the
//! advisor's reply. Useful for smoke-testing a backend and for scripted
//! use; the interactive loop in `chat` is the real consultation
//! experience.

use anyhow::{Context, Result};

use coverly_core::backend::ConsultBackend;
use coverly_core::consultation::ConsultationView;
use coverly_types::wire::ChatTurnRequest;

use crate::state::AppState;

use super::chat::renderer;

/// Send `message` and print the response.
///
/// With `--json`, the raw turn response is printed verbatim so scripts
/// can inspect slots and structured data. Unlike the chat loop, a failed
/// request here is an error, not a transcript line.
pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let request = ChatTurnRequest::new(message.trim(), None);
    let response = state
        .backend
        .send_chat(&request)
        .await
        .context("consultation request failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if response.complete {
        let view = ConsultationView::from_payload(&response.into_consultation());
        renderer::print_consultation(&view);
    } else {
        renderer::print_reply(&response.reply);
    }

    Ok(())
}
