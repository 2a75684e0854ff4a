//! Turn-by-turn chat state machine.
//!
//! The controller owns the transcript and runs one consultation turn at
//! a time: append the user message, send it, classify the response as a
//! plain reply or a final consultation, append the assistant message.
//! Any backend failure appends a fixed error line instead and the
//! controller returns to idle, so the session always survives a bad
//! turn.

use tracing::{debug, warn};

use coverly_types::message::TranscriptMessage;
use coverly_types::profile::ProfileSlots;
use coverly_types::wire::{ChatTurnRequest, ChatTurnResponse};

use crate::backend::ConsultBackend;
use crate::transcript::Transcript;

/// Transcript line shown for any failed turn, whatever the cause.
pub const CONNECTION_ERROR_TEXT: &str = "抱歉，與後端服務連線失敗或發生錯誤。";

/// Where the controller is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    /// Ready for the next user message.
    Idle,
    /// A request is in flight; no new turn may start.
    AwaitingReply,
}

/// What one [`ChatController::submit`] call did.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// Input was empty after trimming; no request was sent.
    Ignored,
    /// The advisor asked a follow-up; the message was appended.
    Replied(TranscriptMessage),
    /// The advisor finalized the consultation; the message carries the
    /// full payload.
    Completed(TranscriptMessage),
    /// The request failed; the fixed error line was appended.
    Failed(TranscriptMessage),
}

/// Drives a consultation session over any [`ConsultBackend`].
///
/// `submit` takes `&mut self` and runs the turn to completion, so a
/// second request structurally cannot start while one is in flight and
/// replies always land in request order.
pub struct ChatController<B: ConsultBackend> {
    backend: B,
    transcript: Transcript,
    phase: ChatPhase,
    conversation_id: Option<String>,
    profile: Option<ProfileSlots>,
}

impl<B: ConsultBackend> ChatController<B> {
    /// Fresh session over `backend`, transcript seeded with the greeting.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transcript: Transcript::with_greeting(),
            phase: ChatPhase::Idle,
            conversation_id: None,
            profile: None,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    /// Most recent profile snapshot the orchestrator reported, if any.
    pub fn profile(&self) -> Option<&ProfileSlots> {
        self.profile.as_ref()
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    /// Drop all per-session state and start over with a fresh greeting.
    ///
    /// The orchestrator keys its slot state by conversation id, so
    /// clearing the id also gives the next turn a blank profile.
    pub fn reset(&mut self) {
        self.transcript = Transcript::with_greeting();
        self.conversation_id = None;
        self.profile = None;
        self.phase = ChatPhase::Idle;
    }

    /// Run one full turn for `input`.
    ///
    /// Trims the input first and ignores it when nothing remains. The
    /// user message is appended before the request goes out, so it stays
    /// in the transcript even when the turn fails.
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        let text = input.trim();
        if text.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.transcript.push(TranscriptMessage::user_text(text));
        self.phase = ChatPhase::AwaitingReply;

        let request = ChatTurnRequest::new(text, self.conversation_id.clone());
        let result = self.backend.send_chat(&request).await;

        let outcome = match result {
            Ok(response) => self.accept(response),
            Err(err) => {
                warn!(error = %err, "consultation turn failed");
                let message = TranscriptMessage::assistant_text(CONNECTION_ERROR_TEXT);
                self.transcript.push(message.clone());
                TurnOutcome::Failed(message)
            }
        };
        self.phase = ChatPhase::Idle;
        outcome
    }

    /// Fold a successful response into the session and append the
    /// assistant message.
    fn accept(&mut self, mut response: ChatTurnResponse) -> TurnOutcome {
        if let Some(id) = response.conversation_id.take() {
            self.conversation_id = Some(id);
        }
        if let Some(slots) = response.slots.take() {
            self.profile = Some(slots);
        }

        if response.complete {
            let data = response.into_consultation();
            debug!(
                recommendations = data.recommendations.len(),
                "consultation finalized"
            );
            let message = TranscriptMessage::assistant_consultation(data);
            self.transcript.push(message.clone());
            TurnOutcome::Completed(message)
        } else {
            let message = TranscriptMessage::assistant_text(response.reply);
            self.transcript.push(message.clone());
            TurnOutcome::Replied(message)
        }
    }
}
